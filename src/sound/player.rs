//! Alert player implementation using rodio.
//!
//! The `RodioAlertPlayer` keeps the sink of the beep it is playing, which is
//! what makes `reset` possible: stopping and dropping that sink silences the
//! beep, and the next `play` starts a fresh one from the beginning.

use std::sync::Mutex;

use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::beep::beep;
use super::error::SoundError;

/// An alert player that uses rodio for audio playback.
pub struct RodioAlertPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// Sink of the beep currently sounding, if any.
    current: Mutex<Option<Sink>>,
}

impl RodioAlertPlayer {
    /// Creates a new alert player on the default output device.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            current: Mutex::new(None),
        })
    }

    /// Starts the beep from the beginning.
    ///
    /// Non-blocking; a beep that is still sounding is cut off.
    ///
    /// # Errors
    ///
    /// Returns an error if a sink cannot be created on the output stream.
    pub fn play(&self) -> Result<(), SoundError> {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;
        sink.append(beep());

        let previous = self
            .current
            .lock()
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?
            .replace(sink);
        if let Some(previous) = previous {
            previous.stop();
        }

        debug!("Beep playback started");
        Ok(())
    }

    /// Silences the beep and rewinds to the start.
    pub fn reset(&self) {
        match self.current.lock() {
            Ok(mut current) => {
                if let Some(sink) = current.take() {
                    sink.stop();
                    debug!("Beep playback stopped");
                }
            }
            Err(e) => warn!("Failed to reset alert player: {}", e),
        }
    }
}

impl std::fmt::Debug for RodioAlertPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let playing = self
            .current
            .lock()
            .map(|current| current.as_ref().is_some_and(|sink| !sink.empty()))
            .unwrap_or(false);
        f.debug_struct("RodioAlertPlayer")
            .field("playing", &playing)
            .finish_non_exhaustive()
    }
}
