//! core/tags/memory.rs
//! In-memory `TagStore`: snapshots keyed by path, no disk IO.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::TagStore;
use super::super::error::RetagError;
use super::super::types::{RawTagSnapshot, TagUpdate};

#[derive(Debug, Default)]
pub struct MemoryTagStore {
    files: Mutex<BTreeMap<PathBuf, RawTagSnapshot>>,
    read_only: bool,
}

impl MemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `write` always fails (persistence failure path).
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, path: impl Into<PathBuf>, tags: RawTagSnapshot) {
        self.lock().insert(path.into(), tags);
    }

    /// Current snapshot for `path`, if the file is known.
    pub fn get(&self, path: &Path) -> Option<RawTagSnapshot> {
        self.lock().get(path).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, RawTagSnapshot>> {
        // A panic while holding the lock can't leave a snapshot half-written.
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TagStore for MemoryTagStore {
    fn ensure_header(&self, path: &Path) -> Result<(), RetagError> {
        if self.lock().contains_key(path) {
            Ok(())
        } else {
            Err(RetagError::unreadable(path, "no such file"))
        }
    }

    fn read(&self, path: &Path) -> Result<RawTagSnapshot, RetagError> {
        self.get(path)
            .ok_or_else(|| RetagError::unreadable(path, "no such file"))
    }

    fn write(&self, path: &Path, update: &TagUpdate) -> Result<(), RetagError> {
        if self.read_only {
            return Err(RetagError::persist(path, "store is read-only"));
        }

        let mut files = self.lock();
        let tags = files
            .get_mut(path)
            .ok_or_else(|| RetagError::persist(path, "no such file"))?;

        tags.artist = Some(update.artist.clone());
        tags.title = Some(update.title.clone());
        if let Some(album_artist) = &update.albumartist {
            tags.albumartist = Some(album_artist.clone());
        }
        Ok(())
    }
}
