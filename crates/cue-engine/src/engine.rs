//! The ticking engine: request matching, lifecycle updates, deferred
//! reclamation.

use cue_ir::{AudioVoice, ClipRepository, PlayRequest};
use thiserror::Error;

use crate::channel_pool::ChannelPool;
use crate::playback::{ActivePlayback, Advance};
use crate::request_queue::RequestQueue;

/// Errors raised by the engine.
///
/// Construction errors are fatal: the engine refuses to exist in a state
/// where it could never play anything. Per-request errors are logged by
/// [`SoundEngine::tick`] and never escape it; a dropped request is dropped
/// permanently, callers needing a retry must resubmit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SoundError {
    /// No voices were supplied; the pool would have zero capacity.
    #[error("channel pool is empty")]
    EmptyPool,
    /// The repository holds no clips; every request would be dropped.
    #[error("clip repository is empty")]
    EmptyRepository,
    /// The request named a clip the repository does not know.
    #[error("unknown clip `{0}`")]
    UnknownClip(String),
    /// Every channel was occupied when the request was drained.
    #[error("no free channel for clip `{0}`")]
    ChannelsExhausted(String),
}

/// Fixed-capacity playback manager.
///
/// Constructed once by the application's composition root and passed by
/// reference to whatever submits requests; there is no ambient global
/// instance. An external per-frame driver calls [`tick`](Self::tick), and
/// everything the engine does happens synchronously inside that call.
pub struct SoundEngine<V> {
    repository: ClipRepository,
    pool: ChannelPool<V>,
    queue: RequestQueue,
    /// Active playbacks in insertion order.
    active: Vec<ActivePlayback>,
    /// Indices into `active` staged for release this tick.
    pending_release: Vec<usize>,
}

impl<V: AudioVoice> SoundEngine<V> {
    /// Create an engine over the given repository and voices.
    ///
    /// Pool capacity is fixed at `voices.len()` for the engine's lifetime.
    pub fn new(repository: ClipRepository, voices: Vec<V>) -> Result<Self, SoundError> {
        if voices.is_empty() {
            return Err(SoundError::EmptyPool);
        }
        if repository.is_empty() {
            return Err(SoundError::EmptyRepository);
        }
        Ok(Self {
            repository,
            pool: ChannelPool::new(voices),
            queue: RequestQueue::new(),
            active: Vec::new(),
            pending_release: Vec::new(),
        })
    }

    /// Buffer a play request for the next tick's drain.
    pub fn submit(&mut self, request: PlayRequest) {
        self.queue.submit(request);
    }

    /// Advance the engine one frame.
    ///
    /// Strictly in order: drain the request queue and start what can be
    /// started, advance every active playback in insertion order, then apply
    /// the releases staged during the update pass. Per-request failures are
    /// logged and skipped; nothing aborts the tick.
    pub fn tick(&mut self) {
        for request in self.queue.drain_all() {
            if let Err(err) = self.start(request) {
                log::warn!("play request dropped: {err}");
            }
        }

        debug_assert_eq!(self.pool.occupied_count(), self.active.len());

        // Update pass. Releases are staged, never applied mid-iteration, so
        // every playback observes a consistent world for the whole tick.
        for index in 0..self.active.len() {
            let playback = &mut self.active[index];
            let voice = self.pool.voice_mut(playback.channel());
            if playback.advance(voice) == Advance::Release {
                self.pending_release.push(index);
            }
        }

        // Reclamation pass. `pending_release` is ascending; walk it backwards
        // so earlier removals don't shift the later indices.
        for index in self.pending_release.drain(..).rev() {
            let playback = self.active.remove(index);
            self.pool.release(playback.channel());
        }

        debug_assert_eq!(self.pool.occupied_count(), self.active.len());
    }

    /// Match one request to a channel and start it.
    fn start(&mut self, request: PlayRequest) -> Result<(), SoundError> {
        let clip = self
            .repository
            .find(&request.clip)
            .ok_or_else(|| SoundError::UnknownClip(request.clip.clone()))?;
        let index = self
            .pool
            .find_free()
            .ok_or_else(|| SoundError::ChannelsExhausted(request.clip.clone()))?;

        self.pool.acquire(index, clip);
        log::debug!(
            "clip `{}` playing on channel {index} ({:?}, {:?})",
            request.clip,
            request.category,
            request.mode,
        );
        self.active.push(ActivePlayback::new(request, index));
        Ok(())
    }

    /// Stop every voice and release every channel.
    ///
    /// Requests already buffered for the next tick are kept; only live
    /// playbacks are torn down. No `on_end` hooks fire.
    pub fn stop_all(&mut self) {
        for playback in self.active.drain(..) {
            let channel = playback.channel();
            self.pool.voice_mut(channel).stop();
            self.pool.release(channel);
        }
        self.pending_release.clear();
    }

    /// Number of playbacks currently bound to a channel.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Fixed channel capacity of the pool.
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Requests buffered and waiting for the next tick.
    pub fn pending_requests(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is queued and nothing is playing.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty() && self.queue.is_empty()
    }

    /// The clip repository this engine resolves names against.
    pub fn repository(&self) -> &ClipRepository {
        &self.repository
    }
}
