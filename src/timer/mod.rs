//! Countdown core of the Pomodoro widget.
//!
//! - `engine`: the state machine (adjust, start/pause, tick, reset)
//! - `ticker`: the cancellable one-second periodic task
//! - `widget`: the component wiring both to the alert player

pub mod engine;
pub mod ticker;
pub mod widget;

pub use engine::{AdjustError, TickOutcome, TimerEngine};
pub use ticker::{Tick, Ticker, TICK_PERIOD};
pub use widget::{Action, PomodoroWidget};
