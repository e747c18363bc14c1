//! The Pomodoro widget component.
//!
//! `PomodoroWidget` ties the [`TimerEngine`] to the [`Ticker`] and an
//! [`AlertPlayer`]. Every user action and every tick goes through it, and
//! after each one it compares the values the countdown depends on and
//! re-arms the ticker if any of them changed.

use tracing::{debug, warn};

use crate::sound::AlertPlayer;
use crate::types::{LengthDelta, Phase, TimerState};

use super::engine::{TickOutcome, TimerEngine};
use super::ticker::{Tick, Ticker};

// ============================================================================
// Action
// ============================================================================

/// User actions the widget responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Lengthen or shorten a phase by one minute
    Adjust(Phase, LengthDelta),
    /// Start or pause the countdown
    ToggleRunning,
    /// Restore the defaults
    Reset,
}

/// Values the periodic task depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DriverKey {
    is_running: bool,
    session_length: u32,
    break_length: u32,
    phase: Phase,
}

impl From<&TimerState> for DriverKey {
    fn from(state: &TimerState) -> Self {
        Self {
            is_running: state.is_running,
            session_length: state.session_length,
            break_length: state.break_length,
            phase: state.phase,
        }
    }
}

// ============================================================================
// PomodoroWidget
// ============================================================================

/// The widget instance: owns its state, countdown task and alert.
pub struct PomodoroWidget<P: AlertPlayer> {
    engine: TimerEngine,
    ticker: Ticker,
    alert: P,
}

impl<P: AlertPlayer> PomodoroWidget<P> {
    /// Creates a widget in the default state with an unarmed ticker.
    pub fn new(alert: P, ticker: Ticker) -> Self {
        Self {
            engine: TimerEngine::new(),
            ticker,
            alert,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &TimerState {
        self.engine.state()
    }

    /// Returns the alert player.
    pub fn alert(&self) -> &P {
        &self.alert
    }

    /// Returns true if the countdown task is active.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Applies a user action.
    pub fn dispatch(&mut self, action: Action) {
        let before = DriverKey::from(self.engine.state());

        match action {
            Action::Adjust(target, delta) => {
                if let Err(e) = self.engine.adjust(target, delta) {
                    debug!("adjustment ignored: {}", e);
                }
            }
            Action::ToggleRunning => {
                self.engine.toggle_running();
            }
            Action::Reset => {
                self.ticker.cancel();
                self.engine.reset();
                self.alert.reset();
            }
        }

        self.sync_ticker(before);
    }

    /// Applies one tick from the countdown task.
    ///
    /// Ticks from a task that has since been cancelled are ignored.
    pub fn handle_tick(&mut self, tick: Tick) -> TickOutcome {
        if !self.ticker.is_current(&tick) {
            debug!(generation = tick.generation(), "stale tick ignored");
            return TickOutcome::Idle;
        }

        let before = DriverKey::from(self.engine.state());
        let outcome = self.engine.tick();

        if outcome.is_transition() {
            if let Err(e) = self.alert.play() {
                warn!("Failed to play alert: {}", e);
            }
        }

        self.sync_ticker(before);
        outcome
    }

    /// Cancels the countdown task and silences the alert.
    pub fn shutdown(&mut self) {
        self.ticker.cancel();
        self.alert.reset();
    }

    fn sync_ticker(&mut self, before: DriverKey) {
        let after = DriverKey::from(self.engine.state());
        if after != before {
            self.ticker.rearm(after.is_running);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
