//! core/tags/read.rs
//! Read the handful of ID3 frames the engine cares about into a `RawTagSnapshot`.

use std::path::Path;

use id3::{ErrorKind, Tag};

use super::super::error::RetagError;
use super::super::types::RawTagSnapshot;
use super::util::{BAND_DESCRIPTION, text_frame, user_text};

pub(crate) fn read_snapshot(path: &Path) -> Result<RawTagSnapshot, RetagError> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(snapshot_from_tag(&tag)),
        // No tag at all is just "nothing set".
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Ok(RawTagSnapshot::default()),
        Err(e) => Err(RetagError::unreadable(path, e)),
    }
}

fn snapshot_from_tag(tag: &Tag) -> RawTagSnapshot {
    RawTagSnapshot {
        artist: text_frame(tag, "TPE1"),
        title: text_frame(tag, "TIT2"),
        albumartist: text_frame(tag, "TPE2"),
        band: user_text(tag, BAND_DESCRIPTION),
    }
}
