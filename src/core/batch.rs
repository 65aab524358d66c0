//! core/batch.rs
//! Run the engine over many files, inline or on a worker thread.
//!
//! - [`run_batch`] is the sequential loop (CLI calls it directly).
//! - [`start_scan`] spawns discovery + `run_batch` on a thread and hands back
//!   a [`ScanHandle`] (stop request) and a `Receiver<ScanEvent>` to poll.
//!
//! Stopping is cooperative: the flag is checked between files, never mid-file.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use super::library::scan_mp3s;
use super::retag::process_file;
use super::tags::TagStore;
use super::types::{ChangeResult, RetagConfig};

#[derive(Debug, Clone)]
pub enum ScanEvent {
    Started { total: usize },
    /// A change was proposed (and written, in write mode).
    Changed(ChangeResult),
    /// File couldn't be read as a tag container.
    Skipped(ChangeResult),
    /// The write step failed.
    Failed { path: PathBuf, error: String },
    Finished(ScanSummary),
    /// Nothing could be scanned at all (bad root, bad config).
    Fatal(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: usize,
    pub changed: usize,
    pub errors: usize,
    pub stopped: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ScanHandle {
    stop: Arc<AtomicBool>,
}

impl ScanHandle {
    /// Ask the worker to stop before the next file.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_stopping(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// Process `paths` in order, reporting through `on_event`.
///
/// Per-file failures are reported and counted, never fatal.
pub fn run_batch<S: TagStore + ?Sized>(
    store: &S,
    paths: &[PathBuf],
    config: &RetagConfig,
    stop: &AtomicBool,
    mut on_event: impl FnMut(ScanEvent),
) -> ScanSummary {
    let mut summary = ScanSummary::default();
    on_event(ScanEvent::Started { total: paths.len() });

    for path in paths {
        if stop.load(Ordering::Relaxed) {
            log::info!("stop requested after {} file(s)", summary.scanned);
            summary.stopped = true;
            break;
        }

        summary.scanned += 1;
        match process_file(store, path, config) {
            Ok(None) => {}
            Ok(Some(result)) if result.error.is_some() => {
                summary.errors += 1;
                on_event(ScanEvent::Skipped(result));
            }
            Ok(Some(result)) => {
                if result.changed {
                    summary.changed += 1;
                    on_event(ScanEvent::Changed(result));
                }
            }
            Err(e) => {
                log::warn!("{e}");
                summary.errors += 1;
                on_event(ScanEvent::Failed {
                    path: path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    on_event(ScanEvent::Finished(summary));
    summary
}

/// Spawn a background scan of `root`.
///
/// Events stop arriving (the receiver disconnects) once the worker is done.
pub fn start_scan<S>(
    store: S,
    root: PathBuf,
    recursive: bool,
    config: RetagConfig,
) -> (ScanHandle, Receiver<ScanEvent>)
where
    S: TagStore + Send + 'static,
{
    let (event_tx, event_rx) = mpsc::channel::<ScanEvent>();
    let handle = ScanHandle::default();
    let stop = Arc::clone(&handle.stop);

    thread::spawn(move || {
        if let Err(e) = config.validate() {
            let _ = event_tx.send(ScanEvent::Fatal(e.to_string()));
            return;
        }

        let paths = match scan_mp3s(&root, recursive) {
            Ok(paths) => paths,
            Err(e) => {
                let _ = event_tx.send(ScanEvent::Fatal(e.to_string()));
                return;
            }
        };

        // Best-effort send: if the UI went away, keep going and finish the file set.
        run_batch(&store, &paths, &config, &stop, |ev| {
            let _ = event_tx.send(ev);
        });
    });

    (handle, event_rx)
}
