//! Command definitions for the Pomodoro widget.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::WidgetConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Timer - an interactive terminal countdown widget
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-widget",
    version,
    about = "Interactive Pomodoro timer widget for the terminal",
    long_about = "Alternates Session and Break countdowns with adjustable lengths.\n\
                  Keys: b/B break -/+, s/S session -/+, space start/pause, r reset, q quit.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Silence the phase-transition alert
    #[arg(long)]
    pub no_sound: bool,

    /// Write log output to this file (logs are discarded otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the widget configuration from the parsed arguments.
    pub fn to_config(&self) -> WidgetConfig {
        WidgetConfig {
            sound_enabled: !self.no_sound,
            log_file: self.log_file.clone(),
            verbose: self.verbose,
        }
    }
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Tests
// ============================================================================
