//! # Process of Elimination
//!
//! The round engine for a word-guessing game: a hidden problem, a display
//! that reveals letters as they're guessed, and a limit on incorrect guesses.
//!
//! A round is a small finite state machine:
//!
//! - **Waiting**: created, no guesses yet
//! - **Playing**: at least one guess accepted
//! - **Won**: every letter revealed (terminal)
//! - **Lost**: incorrect guesses reached the limit (terminal)
//!
//! Letters are compared case-insensitively. Characters that aren't letters
//! (spaces, digits, punctuation) are shown from the start.
//!
//! ## Core Modules
//!
//! - [`game`]: Round state machine, entities and pure display helpers
//! - [`problems`]: Word lists and problem selection
//!
//! ## Example
//!
//! ```
//! use process_of_elimination::{Round, Status};
//!
//! let mut round = Round::start("CAT", 3).unwrap();
//! round.guess('c').unwrap();
//! round.guess('a').unwrap();
//! let view = round.guess('t').unwrap();
//! assert_eq!(view.display, "CAT");
//! assert_eq!(view.status, Status::Won);
//! ```

/// Round state machine, entities and display helpers.
pub mod game;
pub use game::{
    ConfigFault, Round, RoundError, RoundSettings, RoundView, Status,
    constants::{self, DEFAULT_MAX_INCORRECT, MASK_CHAR},
    entities, functional,
};

/// Word lists and problem selection.
pub mod problems;
pub use problems::{ProblemError, WordList, validate_custom_word};
