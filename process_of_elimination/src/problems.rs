//! Problem selection.
//!
//! A [`WordList`] holds the candidate problems a host picks from. The built-in
//! list is used when the host doesn't supply its own.

use rand::{Rng, seq::IndexedRandom};
use std::{fs, path::Path};
use thiserror::Error;

use crate::functional::is_hidden;

const DEFAULT_WORDS: [&str; 15] = [
    "python",
    "programming",
    "computer",
    "algorithm",
    "network",
    "database",
    "interface",
    "variable",
    "function",
    "keyboard",
    "monitor",
    "language",
    "software",
    "hardware",
    "developer",
];

/// Problem source errors
#[derive(Debug, Error)]
pub enum ProblemError {
    /// No usable entries
    #[error("word list is empty")]
    EmptyWordList,

    /// Entry that a round could never be started with
    #[error("word list entry {line} {word:?} has no letters to guess")]
    NoLetters { line: usize, word: String },

    /// Custom word rejected
    #[error("invalid word {0:?}: use letters and spaces only")]
    InvalidWord(String),

    /// Word list file couldn't be read
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// A non-empty list of candidate problems.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordList {
    words: Vec<String>,
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl WordList {
    /// Build a list from `words`, trimming each entry and dropping blank ones.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::NoLetters`] if an entry has nothing to guess; `line`
    ///   is the entry's 1-based position in `words`.
    /// - [`ProblemError::EmptyWordList`] if nothing is left.
    pub fn new<I, S>(words: I) -> Result<Self, ProblemError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_entries(
            words
                .into_iter()
                .enumerate()
                .map(|(i, w)| (i + 1, w.as_ref().trim().to_string())),
        )
    }

    /// Parse a word list with one problem per line. Blank lines and lines
    /// starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::NoLetters`] naming the 1-based line of an entry with
    ///   nothing to guess.
    /// - [`ProblemError::EmptyWordList`] if no problem lines remain.
    pub fn parse(text: &str) -> Result<Self, ProblemError> {
        Self::from_entries(
            text.lines()
                .enumerate()
                .map(|(i, line)| (i + 1, line.trim()))
                .filter(|(_, line)| !line.starts_with('#'))
                .map(|(n, line)| (n, line.to_string())),
        )
    }

    fn from_entries<I>(entries: I) -> Result<Self, ProblemError>
    where
        I: Iterator<Item = (usize, String)>,
    {
        let mut words = Vec::new();
        for (line, word) in entries.filter(|(_, w)| !w.is_empty()) {
            if !word.chars().any(is_hidden) {
                return Err(ProblemError::NoLetters { line, word });
            }
            words.push(word);
        }

        if words.is_empty() {
            return Err(ProblemError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Read and parse a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::Io`] if the file can't be read, otherwise the
    /// same errors as [`WordList::parse`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Pick a problem uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Check a word typed in by a host: non-empty, letters and spaces only.
///
/// # Errors
///
/// Returns [`ProblemError::InvalidWord`] otherwise.
pub fn validate_custom_word(word: &str) -> Result<&str, ProblemError> {
    let trimmed = word.trim();
    let valid = trimmed.chars().any(char::is_alphabetic)
        && trimmed.chars().all(|c| c.is_alphabetic() || c == ' ');
    if valid {
        Ok(trimmed)
    } else {
        Err(ProblemError::InvalidWord(word.to_string()))
    }
}
