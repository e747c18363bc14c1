//! Pomodoro Widget Library
//!
//! This library provides an interactive Pomodoro countdown widget for the
//! terminal. It includes:
//! - Timer engine alternating Session and Break phases
//! - A cancellable one-second countdown driver
//! - Alert playback on phase transitions
//! - Terminal rendering and key bindings
//! - CLI parsing and type definitions for state and configuration

pub mod cli;
pub mod sound;
pub mod timer;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use types::{format_time, LengthDelta, Phase, TimerState, WidgetConfig};

// Re-export timer types
pub use timer::{Action, AdjustError, PomodoroWidget, Tick, TickOutcome, Ticker, TimerEngine};

// Re-export sound types
pub use sound::{
    create_alert_player, AlertPlayer, MockAlertPlayer, RodioAlertPlayer, SilentAlertPlayer,
    SoundError,
};
