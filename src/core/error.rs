//! core/error.rs
//! Error kinds surfaced by the core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetagError {
    /// The file could not be opened/parsed as a tag container,
    /// even after trying to create an empty header.
    #[error("{reason}")]
    Unreadable { path: PathBuf, reason: String },

    /// Writing the new artist/title back to disk failed.
    #[error("failed to write tags to {}: {reason}", path.display())]
    Persist { path: PathBuf, reason: String },

    /// Scan root does not exist.
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A directory under the scan root could not be listed.
    #[error("{}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artist delimiter must not be empty")]
    EmptyDelimiter,
}

impl RetagError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        RetagError::Unreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn persist(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        RetagError::Persist {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
