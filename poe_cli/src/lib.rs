//! Internal modules for the Process of Elimination terminal host.
//!
//! This library provides command parsing, configuration loading and the
//! interactive session loop used by the `poe_cli` binary.

pub mod commands;
pub mod config;
pub mod session;
