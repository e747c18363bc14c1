//! Render-ready projection of the widget state.
//!
//! `View::from_state` is a pure function; the renderer only ever sees a
//! `View`, never the state itself.

use crate::types::{Phase, TimerState};

use super::input::{
    BREAK_DECREMENT_KEY, BREAK_INCREMENT_KEY, SESSION_DECREMENT_KEY, SESSION_INCREMENT_KEY,
};

/// Widget title.
pub const TITLE: &str = "Pomodoro Timer";

/// Decorative logo shown beside the title.
pub const LOGO: &str = "⧗";

/// One decrement / value / increment control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthControl {
    /// Panel heading
    pub label: &'static str,
    /// Current length in minutes
    pub minutes: u32,
    /// Key that shortens the length
    pub decrement_key: char,
    /// Key that lengthens the length
    pub increment_key: char,
    /// False while the countdown runs
    pub enabled: bool,
}

/// Everything the panel displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: &'static str,
    pub logo: &'static str,
    pub break_control: LengthControl,
    pub session_control: LengthControl,
    pub phase: Phase,
    pub timer_label: &'static str,
    pub time_left: String,
    pub start_stop_label: &'static str,
    pub reset_label: &'static str,
}

impl View {
    /// Projects the state into a view.
    pub fn from_state(state: &TimerState) -> Self {
        let enabled = !state.is_running;

        Self {
            title: TITLE,
            logo: LOGO,
            break_control: LengthControl {
                label: "Break Length",
                minutes: state.break_length,
                decrement_key: BREAK_DECREMENT_KEY,
                increment_key: BREAK_INCREMENT_KEY,
                enabled,
            },
            session_control: LengthControl {
                label: "Session Length",
                minutes: state.session_length,
                decrement_key: SESSION_DECREMENT_KEY,
                increment_key: SESSION_INCREMENT_KEY,
                enabled,
            },
            phase: state.phase,
            timer_label: state.label(),
            time_left: state.formatted_time_left(),
            start_stop_label: if state.is_running { "Pause" } else { "Start" },
            reset_label: "Reset",
        }
    }
}
