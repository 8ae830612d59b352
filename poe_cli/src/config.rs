//! Host configuration management.
//!
//! Merges command-line overrides with environment variables and validates
//! the result.

use process_of_elimination::{DEFAULT_MAX_INCORRECT, ProblemError, WordList, validate_custom_word};
use std::{path::PathBuf, str::FromStr};

/// Command-line values that take precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub word: Option<String>,
    pub words_file: Option<PathBuf>,
    pub max_incorrect: Option<u32>,
    pub once: bool,
}

/// Complete host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Custom problem for the first round
    pub word: Option<String>,
    /// Word list to draw problems from; built-in list if `None`
    pub words_file: Option<PathBuf>,
    /// Incorrect guesses allowed per round
    pub max_incorrect: u32,
    /// Stop after one round instead of offering another
    pub once: bool,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a value is present but invalid
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration, reading variables through `lookup`
    ///
    /// # Errors
    ///
    /// Returns error if a value is present but invalid
    pub fn from_lookup<F>(overrides: Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_incorrect = match overrides.max_incorrect {
            Some(n) => n,
            None => parse_var(&lookup, "POE_MAX_INCORRECT")?.unwrap_or(DEFAULT_MAX_INCORRECT),
        };

        let words_file = overrides
            .words_file
            .or_else(|| lookup("POE_WORDS_FILE").map(PathBuf::from));

        let word = overrides
            .word
            .map(|w| {
                validate_custom_word(&w)
                    .map(str::to_string)
                    .map_err(|e| ConfigError::Invalid {
                        var: "--word".to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()?;

        let config = CliConfig {
            word,
            words_file,
            max_incorrect,
            once: overrides.once,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    ///
    /// # Errors
    ///
    /// Returns error if the limit is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_incorrect == 0 {
            return Err(ConfigError::Invalid {
                var: "POE_MAX_INCORRECT".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Load the configured word list, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or has no problems
    pub fn word_list(&self) -> Result<WordList, ProblemError> {
        match &self.words_file {
            Some(path) => WordList::from_path(path),
            None => Ok(WordList::default()),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse a variable if it is set
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| {
            v.trim().parse().map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("Cannot parse '{v}'"),
            })
        })
        .transpose()
}
