//! core/tags/write.rs
//! Write artist/title (and optionally album artist) back to an MP3.

use std::path::Path;

use id3::{ErrorKind, Tag, TagLike, Version};

use super::super::error::RetagError;
use super::super::types::TagUpdate;

/// Fixed minor version for everything we write (widest player support).
const WRITE_VERSION: Version = Version::Id3v23;

/// Make sure the file has an ID3 tag, writing an empty one if not.
pub(crate) fn ensure_header(path: &Path) -> Result<(), RetagError> {
    match Tag::read_from_path(path) {
        Ok(_) => Ok(()),
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => {
            log::debug!("{}: no ID3 tag, writing an empty one", path.display());
            Tag::new()
                .write_to_path(path, WRITE_VERSION)
                .map_err(|e| RetagError::unreadable(path, e))
        }
        Err(e) => Err(RetagError::unreadable(path, e)),
    }
}

/// Replace TPE1/TIT2 (and TPE2 when asked), keep every other frame.
pub(crate) fn write_update(path: &Path, update: &TagUpdate) -> Result<(), RetagError> {
    // Don't start from an empty tag if the existing one is merely unreadable;
    // that would silently drop the rest of the file's metadata.
    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Tag::new(),
        Err(e) => return Err(RetagError::persist(path, e)),
    };

    tag.set_artist(update.artist.as_str());
    tag.set_title(update.title.as_str());
    if let Some(album_artist) = &update.albumartist {
        tag.set_album_artist(album_artist.as_str());
    }

    tag.write_to_path(path, WRITE_VERSION)
        .map_err(|e| RetagError::persist(path, e))
}
