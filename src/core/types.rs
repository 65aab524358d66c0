//! Core data types shared between the engine and the front ends.
//!
//! Rule of thumb:
//! - These structs should be "boring bags of data"
//! - No GUI code
//! - No filesystem code
//! - No tag parsing code
//!
//! `RawTagSnapshot` is what we read, `TagUpdate` is what we write,
//! `ChangeResult` is what we report back for ONE file.

use std::path::PathBuf;

use super::error::RetagError;

/// Per-run settings, supplied by the caller (CLI flags or GUI controls).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetagConfig {
    /// Literal separator between artists in the artist field.
    pub delimiter: String,
    /// Persist changes. `false` = dry run (report only).
    pub write: bool,
    /// Also set album artist (TPE2) to the main artist when writing.
    pub set_albumartist: bool,
}

impl Default for RetagConfig {
    fn default() -> Self {
        Self {
            delimiter: "/".to_string(),
            write: false,
            set_albumartist: false,
        }
    }
}

impl RetagConfig {
    pub fn new(delimiter: impl Into<String>, write: bool, set_albumartist: bool) -> Self {
        Self {
            delimiter: delimiter.into(),
            write,
            set_albumartist,
        }
    }

    /// An empty delimiter would match everywhere, so refuse it up front.
    pub fn validate(&self) -> Result<(), RetagError> {
        if self.delimiter.is_empty() {
            return Err(RetagError::EmptyDelimiter);
        }
        Ok(())
    }
}

/// The subset of a file's existing tags the engine looks at.
///
/// `None` = tag missing (or blank). Values are the first value of the frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTagSnapshot {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub albumartist: Option<String>,
    pub band: Option<String>,
}

/// Fields to persist. Everything else in the file is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUpdate {
    pub artist: String,
    pub title: String,
    pub albumartist: Option<String>,
}

/// What the engine wants to do with one file's artist/title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub old_artist: String,
    pub new_artist: String,
    pub old_title: String,
    pub new_title: String,

    /// Featured names that ended up in (or would have gone into) the "(ft. ...)" suffix.
    pub featured: Vec<String>,
    /// Names dropped because the title credits them as remixers.
    pub remixers: Vec<String>,
}

/// Outcome for one processed file.
///
/// - `error: Some(_)` => file unreadable as a tag container; string fields are empty.
/// - `changed: true` => a new artist/title was proposed (and written, in write mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeResult {
    pub path: PathBuf,
    pub old_artist: String,
    pub new_artist: String,
    pub old_title: String,
    pub new_title: String,
    pub changed: bool,
    pub error: Option<String>,
}

impl ChangeResult {
    pub fn failed(path: PathBuf, error: impl ToString) -> Self {
        Self {
            path,
            old_artist: String::new(),
            new_artist: String::new(),
            old_title: String::new(),
            new_title: String::new(),
            changed: false,
            error: Some(error.to_string()),
        }
    }

    pub fn from_proposal(path: PathBuf, p: Proposal) -> Self {
        let changed = p.new_artist != p.old_artist || p.new_title != p.old_title;
        Self {
            path,
            old_artist: p.old_artist,
            new_artist: p.new_artist,
            old_title: p.old_title,
            new_title: p.new_title,
            changed,
            error: None,
        }
    }
}
