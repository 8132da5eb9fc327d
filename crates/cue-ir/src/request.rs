//! Play requests.

use crate::hooks::PlaybackHooks;

/// Sound category a request belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SoundCategory {
    /// Unclassified.
    #[default]
    None,
    /// Sound effect.
    Sfx,
    /// Background music.
    Music,
    /// Positional sound effect. Reserved; not yet implemented.
    SpatialSfx,
}

/// How a clip is played back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayMode {
    /// Unset. The engine treats this as `PlayOnce`.
    #[default]
    None,
    /// Play the clip once, then release the channel.
    PlayOnce,
    /// Replay on every natural end until a hook stops it.
    LoopUntilCondition,
    /// Replay a fixed number of times, then release.
    LoopFixedCount,
}

/// One sound-play request.
///
/// Immutable once submitted: ownership moves to the engine when enqueued and
/// the engine never hands it back.
#[derive(Debug)]
pub struct PlayRequest {
    /// What kind of sound this is.
    pub category: SoundCategory,
    /// Playback mode.
    pub mode: PlayMode,
    /// Name of the clip, resolved against the repository at drain time.
    pub clip: String,
    /// Number of replays after the initial play. `LoopFixedCount` only.
    pub loop_count: u32,
    /// Optional per-tick hooks.
    pub hooks: PlaybackHooks,
}

impl PlayRequest {
    fn with_mode(clip: &str, mode: PlayMode) -> Self {
        Self {
            category: SoundCategory::Sfx,
            mode,
            clip: clip.to_string(),
            loop_count: 0,
            hooks: PlaybackHooks::new(),
        }
    }

    /// A `PlayOnce` request for the named clip.
    pub fn play_once(clip: &str) -> Self {
        Self::with_mode(clip, PlayMode::PlayOnce)
    }

    /// A `LoopUntilCondition` request for the named clip.
    pub fn looped(clip: &str) -> Self {
        Self::with_mode(clip, PlayMode::LoopUntilCondition)
    }

    /// A `LoopFixedCount` request: one initial play plus `count` replays.
    pub fn repeat(clip: &str, count: u32) -> Self {
        let mut request = Self::with_mode(clip, PlayMode::LoopFixedCount);
        request.loop_count = count;
        request
    }

    /// Set the sound category.
    pub fn category(mut self, category: SoundCategory) -> Self {
        self.category = category;
        self
    }

    /// Fire `hook` when playback ends naturally.
    pub fn on_end(mut self, hook: impl FnMut() -> bool + Send + 'static) -> Self {
        self.hooks.on_end = Some(Box::new(hook));
        self
    }

    /// Pause while running whenever `hook` returns true.
    pub fn pause_when(mut self, hook: impl FnMut() -> bool + Send + 'static) -> Self {
        self.hooks.should_pause = Some(Box::new(hook));
        self
    }

    /// Resume while paused whenever `hook` returns true.
    pub fn resume_when(mut self, hook: impl FnMut() -> bool + Send + 'static) -> Self {
        self.hooks.should_resume = Some(Box::new(hook));
        self
    }

    /// Stop and release the channel when `hook` returns true.
    pub fn stop_when(mut self, hook: impl FnMut() -> bool + Send + 'static) -> Self {
        self.hooks.should_stop = Some(Box::new(hook));
        self
    }
}
