//! Scripted voice for engine tests.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use cue_ir::{AudioVoice, Clip};

/// Observable state shared between a [`FakeVoice`] and the test driving it.
#[derive(Default)]
pub(crate) struct VoiceState {
    remaining: AtomicU32,
    starts: AtomicU32,
    stops: AtomicU32,
    paused: AtomicBool,
    bound: AtomicBool,
}

impl VoiceState {
    /// Simulate the audio driver reaching the end of the clip.
    pub(crate) fn finish(&self) {
        self.remaining.store(0, Ordering::SeqCst);
    }

    pub(crate) fn starts(&self) -> u32 {
        self.starts.load(Ordering::SeqCst)
    }

    pub(crate) fn stops(&self) -> u32 {
        self.stops.load(Ordering::SeqCst)
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.bound.load(Ordering::SeqCst)
    }
}

/// A voice whose clip "plays" until the test calls [`VoiceState::finish`].
pub(crate) struct FakeVoice {
    state: Arc<VoiceState>,
}

impl FakeVoice {
    pub(crate) fn new() -> (Self, Arc<VoiceState>) {
        let state = Arc::new(VoiceState::default());
        (Self { state: state.clone() }, state)
    }
}

impl AudioVoice for FakeVoice {
    fn set_clip(&mut self, clip: Option<&Clip>) {
        self.state.bound.store(clip.is_some(), Ordering::SeqCst);
        if clip.is_none() {
            self.state.remaining.store(0, Ordering::SeqCst);
        }
    }

    fn has_clip(&self) -> bool {
        self.state.bound.load(Ordering::SeqCst)
    }

    fn play(&mut self) {
        self.state.starts.fetch_add(1, Ordering::SeqCst);
        self.state.paused.store(false, Ordering::SeqCst);
        self.state.remaining.store(1, Ordering::SeqCst);
    }

    fn pause(&mut self) {
        self.state.paused.store(true, Ordering::SeqCst);
    }

    fn resume(&mut self) {
        self.state.paused.store(false, Ordering::SeqCst);
    }

    fn stop(&mut self) {
        self.state.stops.fetch_add(1, Ordering::SeqCst);
        self.state.remaining.store(0, Ordering::SeqCst);
    }

    fn is_playing(&self) -> bool {
        self.state.remaining.load(Ordering::SeqCst) > 0
            && !self.state.paused.load(Ordering::SeqCst)
    }
}
