//! Cancellable one-second countdown driver.
//!
//! A [`Ticker`] owns at most one spawned task that emits [`Tick`]s on a
//! channel. Re-arming always cancels the old task before a new one starts,
//! and every tick carries the generation of the task that produced it, so
//! ticks still queued from a cancelled task can be told apart and dropped.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::debug;

/// Cadence of the countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One firing of the periodic task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

impl Tick {
    /// Returns the generation of the task that produced this tick.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owned handle to the periodic countdown task.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    tick_tx: mpsc::UnboundedSender<Tick>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl Ticker {
    /// Creates an unarmed ticker that will deliver ticks on `tick_tx`.
    pub fn new(period: Duration, tick_tx: mpsc::UnboundedSender<Tick>) -> Self {
        Self {
            period,
            tick_tx,
            handle: None,
            generation: 0,
        }
    }

    /// Tears down the current task and, if `running`, starts a fresh one.
    ///
    /// The first tick of the new task fires one full period after this call.
    /// Must be called from within a tokio runtime.
    pub fn rearm(&mut self, running: bool) {
        self.cancel();
        if running {
            self.spawn();
        }
    }

    /// Stops the current task. Ticks it already queued become stale.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(generation = self.generation, "ticker cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns true if a periodic task is active.
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns true if `tick` came from the active task.
    pub fn is_current(&self, tick: &Tick) -> bool {
        self.is_armed() && tick.generation == self.generation
    }

    /// Returns the generation the next tick must carry to be current.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn spawn(&mut self) {
        let generation = self.generation;
        let period = self.period;
        let tick_tx = self.tick_tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if tick_tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));

        debug!(generation, "ticker armed");
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ============================================================================
// Tests
// ============================================================================
