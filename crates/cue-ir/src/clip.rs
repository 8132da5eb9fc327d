//! Clip data types.

use std::sync::Arc;

use arrayvec::ArrayString;

slotmap::new_key_type! {
    /// Key for referencing clips in the repository's clip bank.
    pub struct ClipKey;
}

/// Maximum clip name length in bytes. Longer names are truncated.
pub const MAX_CLIP_NAME: usize = 32;

/// A named, pre-loaded audio asset.
///
/// The payload is the encoded file contents (WAV, OGG, ...); decoding is the
/// backend's concern. Data is shared, so cloning a clip is cheap.
#[derive(Clone, Debug)]
pub struct Clip {
    /// Clip name, the lookup key for play requests.
    pub name: ArrayString<MAX_CLIP_NAME>,
    /// Encoded audio bytes, shared with any voice playing the clip.
    pub data: Arc<[u8]>,
}

impl Clip {
    /// Create a clip from a name and its encoded audio bytes.
    pub fn new(name: &str, data: impl Into<Arc<[u8]>>) -> Self {
        let mut clip = Self {
            name: ArrayString::new(),
            data: data.into(),
        };
        let _ = clip.name.try_push_str(name);
        clip
    }

    /// Create a clip with no audio data.
    pub fn named(name: &str) -> Self {
        Self::new(name, Vec::new())
    }

    /// Length of the encoded payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the clip carries no audio data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
