//! Audio output backends for cuepool.
//!
//! The engine is generic over [`cue_ir::AudioVoice`]; this crate supplies a
//! concrete desktop implementation backed by rodio.

mod rodio_backend;

pub use rodio_backend::{open_output, AudioError, RodioVoice};
