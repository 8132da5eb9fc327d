//! Playback engine for cuepool.
//!
//! Matches queued play requests to a fixed pool of playback channels and
//! advances each active playback's lifecycle once per [`SoundEngine::tick`].
//! Channel teardown is deferred: releases are staged during the update pass
//! and applied only after every playback has been visited.

mod channel_pool;
mod engine;
mod playback;
mod request_queue;

#[cfg(test)]
pub(crate) mod test_voice;

pub use channel_pool::ChannelPool;
pub use engine::{SoundEngine, SoundError};
pub use request_queue::RequestQueue;
