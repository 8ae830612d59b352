//! Round state machine.
//!
//! A [`Round`] starts in [`Status::Waiting`], moves to [`Status::Playing`] on
//! the first accepted guess and ends in [`Status::Won`] or [`Status::Lost`].
//! Every mutating operation checks for a terminal status first.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};
use thiserror::Error;

use super::entities::{RoundSettings, RoundView, Status};
use super::functional;

/// Why a round couldn't be constructed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConfigFault {
    EmptyProblem,
    NoHiddenLetters,
    ZeroMaxIncorrect,
}

impl fmt::Display for ConfigFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::EmptyProblem => "problem is empty",
            Self::NoHiddenLetters => "problem has no letters to guess",
            Self::ZeroMaxIncorrect => "max incorrect guesses must be at least 1",
        };
        write!(f, "{repr}")
    }
}

/// Errors that can occur during round operations
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum RoundError {
    #[error("invalid round config: {0}")]
    InvalidConfig(ConfigFault),
    #[error("round is over")]
    RoundOver,
    #[error("already guessed '{0}'")]
    DuplicateGuess(char),
}

/// A single round of guessing one hidden problem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    problem: String,
    display: String,
    /// Folded with [`functional::fold`] so duplicates are case-insensitive.
    guessed: BTreeSet<char>,
    incorrect_count: u32,
    max_incorrect: u32,
    status: Status,
}

impl Round {
    /// Start a round for `problem` that is lost after `max_incorrect`
    /// incorrect guesses.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidConfig`] if `problem` is empty, has no
    /// letters to guess, or `max_incorrect` is zero.
    pub fn start(problem: &str, max_incorrect: u32) -> Result<Self, RoundError> {
        if problem.is_empty() {
            return Err(RoundError::InvalidConfig(ConfigFault::EmptyProblem));
        }
        if !problem.chars().any(functional::is_hidden) {
            return Err(RoundError::InvalidConfig(ConfigFault::NoHiddenLetters));
        }
        if max_incorrect == 0 {
            return Err(RoundError::InvalidConfig(ConfigFault::ZeroMaxIncorrect));
        }

        let guessed = BTreeSet::new();
        let display = functional::mask(problem, &guessed);
        debug!(
            "starting round: {} characters, {max_incorrect} incorrect allowed",
            problem.chars().count()
        );
        Ok(Self {
            problem: problem.to_string(),
            display,
            guessed,
            incorrect_count: 0,
            max_incorrect,
            status: Status::Waiting,
        })
    }

    /// Start a round using the limits in `settings`.
    ///
    /// # Errors
    ///
    /// Same as [`Round::start`].
    pub fn with_settings(problem: &str, settings: &RoundSettings) -> Result<Self, RoundError> {
        Self::start(problem, settings.max_incorrect)
    }

    /// Apply a single character guess and return the updated view.
    ///
    /// # Errors
    ///
    /// - [`RoundError::RoundOver`] if the round is already won or lost.
    /// - [`RoundError::DuplicateGuess`] if the character (ignoring case) was
    ///   guessed before.
    ///
    /// Neither error changes the round.
    pub fn guess(&mut self, letter: char) -> Result<RoundView, RoundError> {
        if self.status.is_terminal() {
            return Err(RoundError::RoundOver);
        }

        let folded = functional::fold(letter);
        if self.guessed.contains(&folded) {
            return Err(RoundError::DuplicateGuess(letter));
        }

        if self.status == Status::Waiting {
            self.status = Status::Playing;
        }

        self.guessed.insert(folded);
        if functional::occurs_in(&self.problem, letter) {
            self.display = functional::mask(&self.problem, &self.guessed);
            debug!("guess '{letter}' revealed letters");
        } else {
            self.incorrect_count += 1;
            debug!(
                "guess '{letter}' missed ({}/{})",
                self.incorrect_count, self.max_incorrect
            );
        }

        // A guess that completes the problem wins even if it also hits the limit.
        if functional::is_solved(&self.problem, &self.guessed) {
            self.status = Status::Won;
            info!("round won with {} incorrect guesses", self.incorrect_count);
        } else if self.incorrect_count >= self.max_incorrect {
            self.status = Status::Lost;
            info!("round lost after {} guesses", self.guessed.len());
        }

        Ok(self.current_state())
    }

    /// Snapshot of the round. Never changes state.
    #[must_use]
    pub fn current_state(&self) -> RoundView {
        RoundView {
            display: self.display.clone(),
            incorrect_count: self.incorrect_count,
            max_incorrect: self.max_incorrect,
            status: self.status,
            guessed: self.guessed_letters(),
            solution: self.solution().map(str::to_string),
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    #[must_use]
    pub fn max_incorrect(&self) -> u32 {
        self.max_incorrect
    }

    #[must_use]
    pub fn remaining_incorrect(&self) -> u32 {
        self.max_incorrect.saturating_sub(self.incorrect_count)
    }

    /// Guessed characters in sorted order, folded to lowercase.
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        self.guessed.iter().copied().collect()
    }

    /// The problem text, only available once the round is over.
    #[must_use]
    pub fn solution(&self) -> Option<&str> {
        self.status.is_terminal().then_some(self.problem.as_str())
    }

    /// Fraction of letters revealed so far.
    #[must_use]
    pub fn progress(&self) -> f64 {
        functional::progress(&self.problem, &self.guessed)
    }
}
