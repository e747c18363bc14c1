//! CLI module for the Pomodoro widget.
//!
//! - `commands`: Command definitions using clap derive

pub mod commands;

pub use commands::{Cli, Commands};
