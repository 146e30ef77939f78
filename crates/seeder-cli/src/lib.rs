//! Seeder CLI library.
//!
//! Argument parsing and command execution for the `seeder` binary.

pub mod cli;
pub mod commands;
