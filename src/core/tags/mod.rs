//! core/tags/mod.rs
//!
//! Tag I/O adapter.
//! The engine only ever talks to a [`TagStore`]:
//! - [`Id3Store`] reads/writes real ID3 tags on disk.
//! - [`MemoryTagStore`] keeps snapshots in memory (previews, tests).

mod memory;
mod read;
mod util;
mod write;

use std::path::Path;

use super::error::RetagError;
use super::types::{RawTagSnapshot, TagUpdate};

pub use memory::MemoryTagStore;

/// Narrow read-a-field / write-a-field contract the engine depends on.
pub trait TagStore {
    /// Create an empty tag container if the file has none. Never touches existing tags.
    fn ensure_header(&self, path: &Path) -> Result<(), RetagError>;

    /// Read artist/title/albumartist/band (first value of each, blanks as `None`).
    fn read(&self, path: &Path) -> Result<RawTagSnapshot, RetagError>;

    /// Persist the given fields, leaving every other field as it was.
    fn write(&self, path: &Path, update: &TagUpdate) -> Result<(), RetagError>;
}

/// ID3 tags via the `id3` crate. Writes are always ID3v2.3.
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3Store;

impl TagStore for Id3Store {
    fn ensure_header(&self, path: &Path) -> Result<(), RetagError> {
        write::ensure_header(path)
    }

    fn read(&self, path: &Path) -> Result<RawTagSnapshot, RetagError> {
        read::read_snapshot(path)
    }

    fn write(&self, path: &Path, update: &TagUpdate) -> Result<(), RetagError> {
        write::write_update(path, update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::PathBuf;

    use id3::frame::ExtendedText;
    use id3::{ErrorKind, Tag, TagLike, Version};
    use tempfile::TempDir;

    /// An MPEG frame header plus padding; enough for an ID3 tag to be prepended.
    fn fake_mp3(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut bytes = vec![0xFF, 0xFB, 0x90, 0x64];
        bytes.resize(417, 0);
        fs::write(&path, bytes).unwrap();
        path
    }

    fn tagged_mp3(dir: &TempDir, name: &str, build: impl FnOnce(&mut Tag)) -> PathBuf {
        let path = fake_mp3(dir, name);
        let mut tag = Tag::new();
        build(&mut tag);
        tag.write_to_path(&path, Version::Id3v24).unwrap();
        path
    }

    #[test]
    fn ensure_header_creates_an_empty_tag() {
        let dir = TempDir::new().unwrap();
        let path = fake_mp3(&dir, "bare.mp3");

        let err = Tag::read_from_path(&path).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::NoTag));

        Id3Store.ensure_header(&path).unwrap();
        assert!(Tag::read_from_path(&path).is_ok());
        assert_eq!(Id3Store.read(&path).unwrap(), RawTagSnapshot::default());

        // second call is a no-op
        Id3Store.ensure_header(&path).unwrap();
        assert_eq!(Id3Store.read(&path).unwrap(), RawTagSnapshot::default());
    }

    #[test]
    fn ensure_header_keeps_existing_tags() {
        let dir = TempDir::new().unwrap();
        let path = tagged_mp3(&dir, "tagged.mp3", |t| {
            t.set_artist("Daft Punk / Pharrell Williams");
            t.set_album("Random Access Memories");
        });

        Id3Store.ensure_header(&path).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.artist(), Some("Daft Punk / Pharrell Williams"));
        assert_eq!(tag.album(), Some("Random Access Memories"));
    }

    #[test]
    fn read_maps_frames_to_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = tagged_mp3(&dir, "song.mp3", |t| {
            t.set_artist("Tiesto / Zedd");
            t.set_title("Song (Zedd Remix)");
            t.set_album_artist("Tiesto");
            t.add_frame(ExtendedText {
                description: "Band".to_string(),
                value: "Tiesto & Friends".to_string(),
            });
        });

        let snap = Id3Store.read(&path).unwrap();
        assert_eq!(snap.artist.as_deref(), Some("Tiesto / Zedd"));
        assert_eq!(snap.title.as_deref(), Some("Song (Zedd Remix)"));
        assert_eq!(snap.albumartist.as_deref(), Some("Tiesto"));
        assert_eq!(snap.band.as_deref(), Some("Tiesto & Friends"));
    }

    #[test]
    fn write_replaces_only_artist_and_title() {
        let dir = TempDir::new().unwrap();
        let path = tagged_mp3(&dir, "song.mp3", |t| {
            t.set_artist("Daft Punk / Pharrell Williams");
            t.set_title("Get Lucky");
            t.set_album("Random Access Memories");
            t.set_genre("Disco");
        });

        let update = TagUpdate {
            artist: "Daft Punk".to_string(),
            title: "Get Lucky (ft. Pharrell Williams)".to_string(),
            albumartist: None,
        };
        Id3Store.write(&path, &update).unwrap();

        let tag = Tag::read_from_path(&path).unwrap();
        assert_eq!(tag.version(), Version::Id3v23);
        assert_eq!(tag.artist(), Some("Daft Punk"));
        assert_eq!(tag.title(), Some("Get Lucky (ft. Pharrell Williams)"));
        assert_eq!(tag.album(), Some("Random Access Memories"));
        assert_eq!(tag.genre(), Some("Disco"));
        assert_eq!(tag.album_artist(), None);
    }

    #[test]
    fn write_sets_album_artist_when_asked() {
        let dir = TempDir::new().unwrap();
        let path = tagged_mp3(&dir, "song.mp3", |t| t.set_artist("A / B"));

        let update = TagUpdate {
            artist: "A".to_string(),
            title: "song (ft. B)".to_string(),
            albumartist: Some("A".to_string()),
        };
        Id3Store.write(&path, &update).unwrap();

        let snap = Id3Store.read(&path).unwrap();
        assert_eq!(snap.albumartist.as_deref(), Some("A"));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.mp3");

        assert!(matches!(
            Id3Store.ensure_header(&path),
            Err(RetagError::Unreadable { .. })
        ));
        assert!(matches!(Id3Store.read(&path), Err(RetagError::Unreadable { .. })));
    }

    #[test]
    fn untagged_read_only_file_is_reported_not_fatal() {
        use crate::core::retag::process_file;
        use crate::core::types::RetagConfig;

        let dir = TempDir::new().unwrap();
        let path = fake_mp3(&dir, "locked.mp3");
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        // Permission bits don't bind a privileged user; nothing to check then.
        if fs::OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        assert!(matches!(
            Id3Store.ensure_header(&path),
            Err(RetagError::Unreadable { .. })
        ));

        let result = process_file(&Id3Store, &path, &RetagConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(result.path, path);
        assert!(result.error.is_some());
        assert!(!result.changed);
    }

    #[test]
    fn memory_store_write_and_read_only() {
        let store = MemoryTagStore::new();
        store.insert(
            "/music/a.mp3",
            RawTagSnapshot {
                artist: Some("A / B".into()),
                title: Some("Song".into()),
                ..Default::default()
            },
        );

        let update = TagUpdate {
            artist: "A".into(),
            title: "Song (ft. B)".into(),
            albumartist: None,
        };
        store.write(Path::new("/music/a.mp3"), &update).unwrap();

        let snap = store.get(Path::new("/music/a.mp3")).unwrap();
        assert_eq!(snap.artist.as_deref(), Some("A"));
        assert_eq!(snap.title.as_deref(), Some("Song (ft. B)"));
        assert_eq!(snap.albumartist, None);

        let locked = MemoryTagStore::read_only();
        locked.insert("/music/a.mp3", RawTagSnapshot::default());
        assert!(matches!(
            locked.write(Path::new("/music/a.mp3"), &update),
            Err(RetagError::Persist { .. })
        ));
        assert!(matches!(
            locked.read(Path::new("/music/missing.mp3")),
            Err(RetagError::Unreadable { .. })
        ));
    }
}
