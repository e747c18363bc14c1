//! Timer engine for the Pomodoro widget.
//!
//! This module owns the widget state and every operation that mutates it:
//! - Bounded length adjustment (rejected while running or out of range)
//! - Start/pause toggling
//! - One-second countdown steps with Session ↔ Break transitions
//! - Reset to the defaults
//!
//! The engine is synchronous and knows nothing about timers or audio, so the
//! whole state machine can be exercised without a runtime.

use thiserror::Error;
use tracing::{debug, info};

use crate::types::{LengthDelta, Phase, TimerState, MAX_LENGTH_MINUTES, MIN_LENGTH_MINUTES};

// ============================================================================
// AdjustError
// ============================================================================

/// Reasons a length adjustment is rejected.
///
/// A rejected adjustment leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustError {
    /// Lengths are locked while the countdown runs.
    #[error("lengths cannot be changed while the timer is running")]
    Running,

    /// The new length would leave the allowed range.
    #[error("{phase} length must stay within {min}-{max} minutes (requested {requested})")]
    OutOfRange {
        /// The phase whose length was adjusted
        phase: Phase,
        /// The length the adjustment would have produced
        requested: i64,
        /// Lower bound, inclusive
        min: u32,
        /// Upper bound, inclusive
        max: u32,
    },
}

// ============================================================================
// TickOutcome
// ============================================================================

/// Result of a single countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed
    Idle,
    /// One second was taken off the active phase
    Counted {
        /// Remaining seconds after the step
        time_left: u32,
    },
    /// The active phase ran out and the other phase began
    Transitioned {
        /// The phase that is now active
        phase: Phase,
        /// Full length of the new phase, in seconds
        time_left: u32,
    },
}

impl TickOutcome {
    /// Returns true if this step switched phases.
    pub fn is_transition(&self) -> bool {
        matches!(self, TickOutcome::Transitioned { .. })
    }
}

// ============================================================================
// TimerEngine
// ============================================================================

/// State holder for the widget.
#[derive(Debug, Clone, Default)]
pub struct TimerEngine {
    state: TimerState,
}

impl TimerEngine {
    /// Creates an engine holding the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the current state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Adjusts the length of `target` by one minute.
    ///
    /// If `target` is the active phase, the remaining time is re-synchronized
    /// to the new length.
    ///
    /// # Errors
    ///
    /// Returns [`AdjustError::Running`] while the countdown runs and
    /// [`AdjustError::OutOfRange`] if the result would leave 1-60 minutes.
    pub fn adjust(&mut self, target: Phase, delta: LengthDelta) -> Result<u32, AdjustError> {
        if self.state.is_running {
            return Err(AdjustError::Running);
        }

        let current = self.state.length_of(target);
        let new_value = delta
            .apply(current)
            .filter(|value| (MIN_LENGTH_MINUTES..=MAX_LENGTH_MINUTES).contains(value))
            .ok_or(AdjustError::OutOfRange {
                phase: target,
                requested: i64::from(current) + i64::from(delta.as_i32()),
                min: MIN_LENGTH_MINUTES,
                max: MAX_LENGTH_MINUTES,
            })?;

        *self.state.length_mut(target) = new_value;
        if target == self.state.phase {
            self.state.time_left = new_value * 60;
        }

        debug!(phase = %target, minutes = new_value, "length adjusted");
        Ok(new_value)
    }

    /// Starts a stopped countdown or pauses a running one.
    ///
    /// Returns the new running flag. The remaining time is never touched.
    pub fn toggle_running(&mut self) -> bool {
        self.state.is_running = !self.state.is_running;
        if self.state.is_running {
            info!(time_left = self.state.time_left, phase = %self.state.phase, "timer started");
        } else {
            info!(time_left = self.state.time_left, phase = %self.state.phase, "timer paused");
        }
        self.state.is_running
    }

    /// Advances the countdown by one second.
    ///
    /// The step that would bring the remaining time to zero switches to the
    /// other phase instead, loading that phase's full length.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running {
            return TickOutcome::Idle;
        }

        if self.state.time_left <= 1 {
            let next = self.state.phase.other();
            self.state.phase = next;
            self.state.time_left = self.state.length_of(next) * 60;

            info!(phase = %next, time_left = self.state.time_left, "phase transition");
            return TickOutcome::Transitioned {
                phase: next,
                time_left: self.state.time_left,
            };
        }

        self.state.time_left -= 1;
        TickOutcome::Counted {
            time_left: self.state.time_left,
        }
    }

    /// Restores the default state and stops the countdown.
    pub fn reset(&mut self) {
        self.state = TimerState::default();
        info!("timer reset");
    }

    /// Returns a mutable reference to the state (for testing).
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
