//! Round engine - state machine and pure helpers for a single round.
//!
//! This module provides:
//! - The [`Round`] state machine (`WAITING → PLAYING → {WON, LOST}`)
//! - Status, settings and view entities shared with hosts
//! - Pure masking functions used to derive the display

pub mod constants;
pub mod entities;
pub mod functional;
mod state_machine;

pub use entities::{RoundSettings, RoundView, Status};
pub use state_machine::{ConfigFault, Round, RoundError};
