//! Rodio-backed voices.
//!
//! One `rodio::Sink` per voice. Clips carry their encoded file bytes, so a
//! voice decodes on every (re)start; clip data is shared via `Arc`, binding
//! never copies audio.

use std::io::Cursor;
use std::sync::Arc;

use cue_ir::{AudioVoice, Clip};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use thiserror::Error;

/// Errors from device and sink setup.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No usable output device.
    #[error("failed to open audio output device: {0}")]
    DeviceInit(String),
    /// Sink creation failed.
    #[error("failed to create playback sink: {0}")]
    SinkCreate(String),
}

/// Open the default audio output.
///
/// The returned `OutputStream` must be kept alive for as long as any voice
/// built from its handle; dropping it silences every sink.
pub fn open_output() -> Result<(OutputStream, OutputStreamHandle), AudioError> {
    OutputStream::try_default().map_err(|e| AudioError::DeviceInit(e.to_string()))
}

/// A playback voice backed by one rodio sink.
pub struct RodioVoice {
    sink: Sink,
    data: Option<Arc<[u8]>>,
}

impl RodioVoice {
    /// Create a voice on the given output.
    pub fn new(handle: &OutputStreamHandle) -> Result<Self, AudioError> {
        let sink = Sink::try_new(handle).map_err(|e| AudioError::SinkCreate(e.to_string()))?;
        Ok(Self { sink, data: None })
    }

    /// Build a pool of `count` voices sharing one output.
    pub fn pool(handle: &OutputStreamHandle, count: usize) -> Result<Vec<Self>, AudioError> {
        (0..count).map(|_| Self::new(handle)).collect()
    }
}

impl AudioVoice for RodioVoice {
    fn set_clip(&mut self, clip: Option<&Clip>) {
        if clip.is_none() {
            self.sink.stop();
        }
        self.data = clip.map(|c| c.data.clone());
    }

    fn has_clip(&self) -> bool {
        self.data.is_some()
    }

    fn play(&mut self) {
        let Some(data) = self.data.clone() else {
            log::error!("play on a voice with no clip bound");
            return;
        };
        // Restart from the beginning: drop whatever is queued first.
        self.sink.stop();
        match Decoder::new(Cursor::new(data)) {
            Ok(source) => {
                self.sink.append(source);
                self.sink.play();
            }
            Err(err) => log::error!("failed to decode clip: {err}"),
        }
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.stop();
    }

    fn is_playing(&self) -> bool {
        !self.sink.empty() && !self.sink.is_paused()
    }
}
