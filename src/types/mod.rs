//! Core data types for the Pomodoro widget.
//!
//! This module defines the data structures used for:
//! - The active countdown phase and its display label
//! - Timer state with the default lengths
//! - Length adjustment direction
//! - Widget configuration with validation

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default session length in minutes.
pub const DEFAULT_SESSION_MINUTES: u32 = 25;

/// Default break length in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Shortest length a phase may be set to, in minutes.
pub const MIN_LENGTH_MINUTES: u32 = 1;

/// Longest length a phase may be set to, in minutes.
pub const MAX_LENGTH_MINUTES: u32 = 60;

// ============================================================================
// Phase
// ============================================================================

/// The countdown mode that is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Focused work
    #[default]
    Session,
    /// Rest between sessions
    Break,
}

impl Phase {
    /// Returns the label shown above the countdown.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Session => "Session",
            Phase::Break => "Break",
        }
    }

    /// Returns the phase that follows this one.
    pub fn other(&self) -> Phase {
        match self {
            Phase::Session => Phase::Break,
            Phase::Break => Phase::Session,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// LengthDelta
// ============================================================================

/// Direction of a single length adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthDelta {
    /// One minute shorter
    Decrement,
    /// One minute longer
    Increment,
}

impl LengthDelta {
    /// Applies this delta to a length, returning `None` on underflow.
    pub fn apply(&self, minutes: u32) -> Option<u32> {
        match self {
            LengthDelta::Decrement => minutes.checked_sub(1),
            LengthDelta::Increment => minutes.checked_add(1),
        }
    }

    /// Returns the signed step this delta represents.
    pub fn as_i32(&self) -> i32 {
        match self {
            LengthDelta::Decrement => -1,
            LengthDelta::Increment => 1,
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The complete state of the widget.
///
/// Mutated only through [`crate::timer::TimerEngine`]; everything else reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Session length in minutes (1-60)
    pub session_length: u32,
    /// Break length in minutes (1-60)
    pub break_length: u32,
    /// Seconds remaining in the active phase
    pub time_left: u32,
    /// Whether the countdown is ticking
    pub is_running: bool,
    /// The active phase
    pub phase: Phase,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            session_length: DEFAULT_SESSION_MINUTES,
            break_length: DEFAULT_BREAK_MINUTES,
            time_left: DEFAULT_SESSION_MINUTES * 60,
            is_running: false,
            phase: Phase::Session,
        }
    }
}

impl TimerState {
    /// Returns the configured length of the given phase, in minutes.
    pub fn length_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Session => self.session_length,
            Phase::Break => self.break_length,
        }
    }

    /// Returns a mutable reference to the length of the given phase.
    pub(crate) fn length_mut(&mut self, phase: Phase) -> &mut u32 {
        match phase {
            Phase::Session => &mut self.session_length,
            Phase::Break => &mut self.break_length,
        }
    }

    /// Returns the label of the active phase.
    pub fn label(&self) -> &'static str {
        self.phase.label()
    }

    /// Returns the remaining time formatted as `MM:SS`.
    pub fn formatted_time_left(&self) -> String {
        format_time(self.time_left)
    }
}

/// Formats seconds as zero-padded `MM:SS`.
pub fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// WidgetConfig
// ============================================================================

/// Runtime configuration for the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Whether the transition alert is audible
    pub sound_enabled: bool,
    /// File that receives log output while the panel owns the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Whether debug logging is enabled
    pub verbose: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            log_file: None,
            verbose: false,
        }
    }
}

impl WidgetConfig {
    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.log_file {
            if path.as_os_str().is_empty() {
                return Err("log file path must not be empty".to_string());
            }
            if path.is_dir() {
                return Err(format!("log file path is a directory: {}", path.display()));
            }
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.is_dir() {
                    return Err(format!(
                        "log file directory does not exist: {}",
                        parent.display()
                    ));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
