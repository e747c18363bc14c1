//! The phase-transition beep.
//!
//! Generated on the fly instead of loaded from a file, so the alert never
//! depends on anything outside the binary.

use std::time::Duration;

use rodio::source::{SineWave, Source};

/// Pitch of the beep.
pub const BEEP_FREQUENCY_HZ: f32 = 880.0;

/// How long the beep sounds.
pub const BEEP_DURATION: Duration = Duration::from_millis(500);

/// Peak amplitude of the beep, relative to full scale.
pub const BEEP_VOLUME: f32 = 0.25;

/// Returns a fresh beep source positioned at its start.
pub fn beep() -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(BEEP_FREQUENCY_HZ)
        .take_duration(BEEP_DURATION)
        .amplify(BEEP_VOLUME)
}
