//! core/mod.rs
//!
//! The brain of the app:
//! - Fold names to a comparable form (`text`)
//! - Split the artist field and pick the main artist (`artists`)
//! - Decide the new artist/title for a file (`retag`)
//! - Read/write tags through a narrow adapter (`tags`)
//! - Discover files and drive a whole scan (`library`, `batch`)
//!
//! The pipeline per run is:
//!   (A) discover paths -> Vec<PathBuf>
//!   (B) per path: ensure header -> read -> decide -> maybe write -> ChangeResult
//!
//! Front ends stay dumb: they build a `RetagConfig`, call in, and render what comes back.

pub mod artists;
pub mod batch;
pub mod error;
pub mod library;
pub mod retag;
pub mod tags;
pub mod text;
pub mod types;

pub use batch::{ScanEvent, ScanHandle, ScanSummary, run_batch, start_scan};
pub use error::RetagError;
pub use library::scan_mp3s;
pub use retag::{decide, process_file};
pub use tags::{Id3Store, MemoryTagStore, TagStore};
pub use types::{ChangeResult, Proposal, RawTagSnapshot, RetagConfig, TagUpdate};
