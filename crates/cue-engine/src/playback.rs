//! Per-voice playback lifecycle.

use cue_ir::{AudioVoice, PlayMode, PlayRequest};

/// What the engine should do with a playback after its per-tick advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Advance {
    /// Keep the playback in the active set.
    Continue,
    /// Stage the playback for the deferred-release pass.
    Release,
}

/// The live state of one in-progress request bound to a channel.
pub(crate) struct ActivePlayback {
    request: PlayRequest,
    channel: usize,
    /// Replays completed so far (`LoopFixedCount` only).
    loops_done: u32,
    /// Running (true) vs paused (false). This is what distinguishes a
    /// natural end from a pause, since a paused voice also reports
    /// not-playing.
    playing: bool,
}

impl ActivePlayback {
    pub(crate) fn new(request: PlayRequest, channel: usize) -> Self {
        Self {
            request,
            channel,
            loops_done: 0,
            playing: true,
        }
    }

    /// Index of the channel this playback owns.
    pub(crate) fn channel(&self) -> usize {
        self.channel
    }

    /// Advance the state machine one tick.
    ///
    /// Transitions are evaluated in a fixed order: pause, resume, stop,
    /// natural end. A stop that fires in the same tick as a natural end
    /// wins, and the stop path never fires `on_end`.
    pub(crate) fn advance<V: AudioVoice>(&mut self, voice: &mut V) -> Advance {
        if self.playing && self.request.hooks.wants_pause() {
            voice.pause();
            self.playing = false;
        }

        if !self.playing && self.request.hooks.wants_resume() {
            voice.resume();
            self.playing = true;
        }

        if self.request.hooks.wants_stop() {
            voice.stop();
            self.playing = false;
            return Advance::Release;
        }

        // Natural end: the voice stopped on its own, not via pause.
        if self.playing && !voice.is_playing() {
            return self.clip_ended(voice);
        }

        Advance::Continue
    }

    /// Dispatch a natural end according to the playback mode.
    fn clip_ended<V: AudioVoice>(&mut self, voice: &mut V) -> Advance {
        match self.request.mode {
            PlayMode::LoopUntilCondition => {
                voice.play();
                Advance::Continue
            }
            PlayMode::LoopFixedCount => {
                if self.loops_done < self.request.loop_count {
                    self.loops_done += 1;
                    voice.play();
                    Advance::Continue
                } else {
                    self.request.hooks.fire_on_end();
                    Advance::Release
                }
            }
            // PlayOnce, and the defensive default for an unset mode.
            PlayMode::PlayOnce | PlayMode::None => {
                self.request.hooks.fire_on_end();
                Advance::Release
            }
        }
    }
}
