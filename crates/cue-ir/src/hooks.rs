//! Caller-supplied playback hooks.

use std::fmt;

/// A zero-argument predicate evaluated at most once per tick.
pub type Hook = Box<dyn FnMut() -> bool + Send>;

/// Optional hook slots carried by a play request.
///
/// Hooks must be side-effect-light: a request submitted from inside a hook is
/// only seen by the next tick's drain, never the current one.
#[derive(Default)]
pub struct PlaybackHooks {
    /// Fired when playback ends naturally. Never fired on an explicit stop.
    pub on_end: Option<Hook>,
    /// A running playback pauses when this returns true.
    pub should_pause: Option<Hook>,
    /// A paused playback resumes when this returns true.
    pub should_resume: Option<Hook>,
    /// Playback stops and its channel is reclaimed when this returns true.
    pub should_stop: Option<Hook>,
}

impl PlaybackHooks {
    /// Create an empty hook set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `should_pause`; an unbound slot never pauses.
    pub fn wants_pause(&mut self) -> bool {
        Self::eval(&mut self.should_pause)
    }

    /// Evaluate `should_resume`; an unbound slot never resumes.
    pub fn wants_resume(&mut self) -> bool {
        Self::eval(&mut self.should_resume)
    }

    /// Evaluate `should_stop`; an unbound slot never stops.
    pub fn wants_stop(&mut self) -> bool {
        Self::eval(&mut self.should_stop)
    }

    /// Fire `on_end` if bound. The hook's return value is ignored.
    pub fn fire_on_end(&mut self) {
        if let Some(hook) = self.on_end.as_mut() {
            let _ = hook();
        }
    }

    fn eval(slot: &mut Option<Hook>) -> bool {
        slot.as_mut().map_or(false, |hook| hook())
    }
}

impl fmt::Debug for PlaybackHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackHooks")
            .field("on_end", &self.on_end.is_some())
            .field("should_pause", &self.should_pause.is_some())
            .field("should_resume", &self.should_resume.is_some())
            .field("should_stop", &self.should_stop.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn unbound_slots_evaluate_false() {
        let mut hooks = PlaybackHooks::new();
        assert!(!hooks.wants_pause());
        assert!(!hooks.wants_resume());
        assert!(!hooks.wants_stop());
        hooks.fire_on_end(); // no-op, must not panic
    }

    #[test]
    fn bound_slot_is_evaluated() {
        let mut hooks = PlaybackHooks::new();
        hooks.should_stop = Some(Box::new(|| true));
        assert!(hooks.wants_stop());
    }

    #[test]
    fn on_end_fires_once_per_call() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let mut hooks = PlaybackHooks::new();
        hooks.on_end = Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }));
        hooks.fire_on_end();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
