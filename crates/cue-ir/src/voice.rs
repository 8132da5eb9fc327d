//! The voice abstraction the engine drives.

use crate::clip::Clip;

/// One playback unit capable of rendering a single clip at a time.
///
/// The engine owns one voice per channel and drives it exclusively through
/// this trait; decoding, mixing and output are the backend's concern. A free
/// voice must hold no clip.
pub trait AudioVoice: Send {
    /// Bind a clip to the voice, or clear the binding with `None`.
    fn set_clip(&mut self, clip: Option<&Clip>);

    /// Returns true if a clip is currently bound.
    fn has_clip(&self) -> bool;

    /// Start (or restart) playback of the bound clip from the beginning.
    fn play(&mut self);

    /// Pause playback, keeping the current position.
    fn pause(&mut self);

    /// Resume paused playback.
    fn resume(&mut self);

    /// Stop playback and discard the current position.
    fn stop(&mut self);

    /// Is the voice currently producing audio?
    ///
    /// Both a paused voice and one that reached the end of its clip report
    /// false; the engine tells the two apart with its own running flag.
    fn is_playing(&self) -> bool;
}
