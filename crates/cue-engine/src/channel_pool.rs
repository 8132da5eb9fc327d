//! Fixed-size pool of playback channels.

use cue_ir::{AudioVoice, Clip};

/// One slot in the pool: a voice plus its occupancy flag.
///
/// Channels never change position; only the flag and the bound voice state
/// change over the pool's lifetime.
struct Channel<V> {
    voice: V,
    in_use: bool,
}

/// Fixed-size array of voices with an occupancy bitmap.
///
/// Capacity is set at construction and never changes. Allocation scans in
/// index order, so the lowest free index always wins.
pub struct ChannelPool<V> {
    channels: Vec<Channel<V>>,
}

impl<V: AudioVoice> ChannelPool<V> {
    /// Build a pool owning the given voices. Capacity equals `voices.len()`.
    pub fn new(voices: Vec<V>) -> Self {
        Self {
            channels: voices
                .into_iter()
                .map(|voice| Channel { voice, in_use: false })
                .collect(),
        }
    }

    /// Number of channels in the pool.
    pub fn capacity(&self) -> usize {
        self.channels.len()
    }

    /// Number of occupied channels.
    pub fn occupied_count(&self) -> usize {
        self.channels.iter().filter(|c| c.in_use).count()
    }

    /// First free channel index, or `None` if all are occupied.
    pub fn find_free(&self) -> Option<usize> {
        self.channels.iter().position(|c| !c.in_use)
    }

    /// Mark the slot occupied, bind the clip to its voice and start playback.
    pub fn acquire(&mut self, index: usize, clip: &Clip) {
        let channel = &mut self.channels[index];
        channel.in_use = true;
        channel.voice.set_clip(Some(clip));
        channel.voice.play();
    }

    /// Clear the clip binding and mark the slot free.
    ///
    /// Only the engine's deferred-release pass calls this; releasing a
    /// channel mid-update would pull an entry out from under the iteration.
    pub fn release(&mut self, index: usize) {
        let channel = &mut self.channels[index];
        channel.voice.set_clip(None);
        channel.in_use = false;
    }

    /// Is the slot at `index` free?
    pub fn is_free(&self, index: usize) -> bool {
        !self.channels[index].in_use
    }

    /// Mutable access to the voice bound to a channel.
    pub fn voice_mut(&mut self, index: usize) -> &mut V {
        &mut self.channels[index].voice
    }
}
