//! Name-to-clip lookup, built once at startup.

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::clip::{Clip, ClipKey};

/// Owns all clip data and maps names to keys.
///
/// Built once by the composition root; the engine only reads from it.
#[derive(Default)]
pub struct ClipRepository {
    bank: SlotMap<ClipKey, Clip>,
    by_name: HashMap<String, ClipKey>,
}

impl ClipRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from parallel name/clip lists.
    ///
    /// Mismatched lengths truncate to the shorter list. The truncation is
    /// deliberate (it preserves the historical behaviour of feeding two
    /// hand-maintained lists), but it is logged so a mismatch is visible at
    /// startup instead of surfacing as a missing clip later.
    pub fn from_parallel_lists<S: AsRef<str>>(names: &[S], clips: Vec<Clip>) -> Self {
        if names.len() != clips.len() {
            log::warn!(
                "clip name/asset list length mismatch ({} names, {} clips); \
                 truncating to {}",
                names.len(),
                clips.len(),
                names.len().min(clips.len()),
            );
        }
        let mut repo = Self::new();
        for (name, mut clip) in names.iter().zip(clips) {
            clip.name.clear();
            let _ = clip.name.try_push_str(name.as_ref());
            repo.insert(clip);
        }
        repo
    }

    /// Register a clip under its own name, returning its key.
    ///
    /// A duplicate name replaces the earlier clip.
    pub fn insert(&mut self, clip: Clip) -> ClipKey {
        let name = clip.name.to_string();
        let key = self.bank.insert(clip);
        if let Some(old) = self.by_name.insert(name.clone(), key) {
            log::warn!("clip `{name}` registered twice; keeping the newest");
            self.bank.remove(old);
        }
        key
    }

    /// Look up a clip key by name.
    pub fn lookup(&self, name: &str) -> Option<ClipKey> {
        self.by_name.get(name).copied()
    }

    /// Look up a clip by name.
    pub fn find(&self, name: &str) -> Option<&Clip> {
        self.by_name.get(name).and_then(|key| self.bank.get(*key))
    }

    /// Get a clip by key.
    pub fn get(&self, key: ClipKey) -> Option<&Clip> {
        self.bank.get(key)
    }

    /// Number of registered clips.
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    /// Returns true if no clips are registered.
    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }
}
