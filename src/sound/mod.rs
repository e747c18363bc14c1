//! Alert playback for the Pomodoro widget.
//!
//! This module provides the audible cue played at each phase transition:
//!
//! - A generated beep (no external sound files)
//! - Non-blocking playback with stop-and-rewind on reset
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   AlertPlayer    │ ← Trait used by the widget
//! └────────┬─────────┘
//!          │
//!    ┌─────┴──────────────┬─────────────────────┐
//!    ▼                    ▼                     ▼
//! RodioAlertPlayer   SilentAlertPlayer    MockAlertPlayer
//! (audio device)     (no device/--no-sound) (tests)
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use pomodoro_widget::sound::{create_alert_player, AlertPlayer};
//!
//! let player = create_alert_player(true);
//! if let Err(e) = player.play() {
//!     eprintln!("Could not play beep: {}", e);
//! }
//! player.reset();
//! ```

mod beep;
mod error;
mod player;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tracing::{info, warn};

pub use beep::{beep, BEEP_DURATION, BEEP_FREQUENCY_HZ, BEEP_VOLUME};
pub use error::SoundError;
pub use player::RodioAlertPlayer;

/// Trait for alert playback implementations.
///
/// This trait abstracts the alert functionality, allowing for different
/// implementations (e.g., rodio-based, silent, mock for testing).
pub trait AlertPlayer {
    /// Starts the alert from its beginning.
    ///
    /// This method should be non-blocking; the sound plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self) -> Result<(), SoundError>;

    /// Halts playback and rewinds to the start.
    fn reset(&self);

    /// Returns true if the alert can actually be heard.
    fn is_available(&self) -> bool;
}

impl AlertPlayer for RodioAlertPlayer {
    fn play(&self) -> Result<(), SoundError> {
        RodioAlertPlayer::play(self)
    }

    fn reset(&self) {
        RodioAlertPlayer::reset(self)
    }

    fn is_available(&self) -> bool {
        true
    }
}

impl<P: AlertPlayer + ?Sized> AlertPlayer for Box<P> {
    fn play(&self) -> Result<(), SoundError> {
        (**self).play()
    }

    fn reset(&self) {
        (**self).reset()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// Alert player that never makes a sound.
///
/// Used when sound is disabled or no audio device exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlertPlayer;

impl AlertPlayer for SilentAlertPlayer {
    fn play(&self) -> Result<(), SoundError> {
        Ok(())
    }

    fn reset(&self) {}

    fn is_available(&self) -> bool {
        false
    }
}

/// Mock alert player for testing.
#[derive(Debug, Default)]
pub struct MockAlertPlayer {
    play_calls: AtomicUsize,
    reset_calls: AtomicUsize,
    playing: AtomicBool,
    should_fail: AtomicBool,
}

impl MockAlertPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn reset_count(&self) -> usize {
        self.reset_calls.load(Ordering::SeqCst)
    }

    /// Returns true between a successful `play` and the next `reset`.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

impl AlertPlayer for MockAlertPlayer {
    fn play(&self) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.fetch_add(1, Ordering::SeqCst);
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn reset(&self) {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        self.playing.store(false, Ordering::SeqCst);
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Creates the alert player for the widget.
///
/// Falls back to a [`SilentAlertPlayer`] when sound is disabled or the audio
/// device cannot be opened, so the widget always has a player to call.
#[must_use]
pub fn create_alert_player(sound_enabled: bool) -> Box<dyn AlertPlayer> {
    if !sound_enabled {
        info!("Sound disabled, alerts will be silent");
        return Box::new(SilentAlertPlayer);
    }

    match RodioAlertPlayer::new() {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!("Audio not available, alerts will be silent: {} ({})", e, e.suggestion());
            Box::new(SilentAlertPlayer)
        }
    }
}
