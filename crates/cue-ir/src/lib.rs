//! Core types for the cuepool playback manager.
//!
//! This crate defines the shared vocabulary of the engine: clips and the
//! repository that maps names to them, play requests with their optional
//! hooks, and the [`AudioVoice`] trait a backend implements. The engine
//! crate consumes these types; it never touches audio data directly.

mod clip;
mod hooks;
mod repository;
mod request;
mod voice;

pub use clip::{Clip, ClipKey, MAX_CLIP_NAME};
pub use hooks::{Hook, PlaybackHooks};
pub use repository::ClipRepository;
pub use request::{PlayMode, PlayRequest, SoundCategory};
pub use voice::AudioVoice;
