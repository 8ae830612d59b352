use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::DEFAULT_MAX_INCORRECT;

/// Where a round is in its lifecycle.
///
/// `Won` and `Lost` are terminal; no guess is accepted once either is reached.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Waiting,
    Playing,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Waiting => "WAITING",
            Self::Playing => "PLAYING",
            Self::Won => "WON",
            Self::Lost => "LOST",
        };
        write!(f, "{repr}")
    }
}

/// Round configuration settings
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundSettings {
    pub max_incorrect: u32,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INCORRECT)
    }
}

impl RoundSettings {
    #[must_use]
    pub const fn new(max_incorrect: u32) -> Self {
        Self { max_incorrect }
    }
}

/// Read-only snapshot of a round, safe to hand to a renderer.
///
/// The solution is only filled in once the round is over so a host can't
/// leak the problem while it is still being guessed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundView {
    pub display: String,
    pub incorrect_count: u32,
    pub max_incorrect: u32,
    pub status: Status,
    pub guessed: Vec<char>,
    pub solution: Option<String>,
}

impl RoundView {
    /// Incorrect guesses left before the round is lost.
    #[must_use]
    pub const fn remaining_incorrect(&self) -> u32 {
        self.max_incorrect.saturating_sub(self.incorrect_count)
    }

    /// The display with a space between every character, e.g. `C _ _`.
    #[must_use]
    pub fn spaced_display(&self) -> String {
        let chars: Vec<String> = self.display.chars().map(String::from).collect();
        chars.join(" ")
    }
}

impl fmt::Display for RoundView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guessed: String = self.guessed.iter().collect();
        writeln!(f, "{}", self.spaced_display())?;
        writeln!(f, "guessed: [{guessed}]")?;
        write!(
            f,
            "incorrect: {}/{} ({})",
            self.incorrect_count, self.max_incorrect, self.status
        )
    }
}
