//! gui/update/scan.rs
//! Scan lifecycle: validate controls, spawn the worker, drain its events into the log.
//!
//! - The worker is `core::start_scan` (discovery + per-file engine on a thread).
//! - `TickScan` drains whatever arrived; a disconnected channel means the worker is done.
//! - Stop is cooperative: the worker finishes the current file first.

use std::path::PathBuf;
use std::sync::mpsc::TryRecvError;

use iced::{Task, window};

use retagger::core::{self, Id3Store, RetagConfig, ScanEvent, ScanSummary};

use super::super::state::{Message, Retagger};
use super::super::util::{display_name, rule};

pub(crate) fn start_or_stop(state: &mut Retagger) -> Task<Message> {
    if let Some(scan) = &state.scan {
        scan.stop();
        state.status = "Stopping...".to_string();
        return Task::none();
    }

    let path_str = state.root_input.trim();
    if path_str.is_empty() {
        state.status = "Please select a directory first.".to_string();
        return Task::none();
    }

    let root = PathBuf::from(path_str);
    if !root.exists() {
        state.status = format!("Path does not exist: {}", root.display());
        return Task::none();
    }

    let config = RetagConfig::new(
        state.delimiter.clone(),
        state.write_mode,
        state.set_albumartist,
    );
    if let Err(e) = config.validate() {
        state.status = e.to_string();
        return Task::none();
    }

    state.log.clear();
    let mode = if config.write { "WRITE MODE" } else { "DRY RUN" };
    state.log_line(format!("[START] Starting scan in {mode}..."));
    state.log_line(format!("  Target: {}", root.display()));
    state.log_line(rule());

    log::info!(
        "scan started: root={} recursive={} write={}",
        root.display(),
        state.scan_subfolders,
        config.write
    );

    let (handle, events) = core::start_scan(Id3Store, root, state.scan_subfolders, config);
    state.scan = Some(handle);
    state.scan_events = Some(events);
    state.status = "Scanning...".to_string();

    Task::none()
}

pub(crate) fn drain_events(state: &mut Retagger) -> Task<Message> {
    let Some(rx) = state.scan_events.as_ref() else {
        return Task::none();
    };

    let mut drained: Vec<ScanEvent> = Vec::new();
    let mut done = false;
    loop {
        match rx.try_recv() {
            Ok(ev) => drained.push(ev),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                done = true;
                break;
            }
        }
    }

    for ev in drained {
        handle_event(state, ev);
    }

    if done {
        return finish(state);
    }

    Task::none()
}

fn handle_event(state: &mut Retagger, ev: ScanEvent) {
    match ev {
        ScanEvent::Started { total } => {
            if total == 0 {
                state.log_line("no .mp3 files found in target directory");
                if !state.scan_subfolders {
                    state.log_line("(maybe you forgot to enable 'Scan Subfolders'?)");
                }
                state.status = "No .mp3 files found.".to_string();
            } else {
                state.status = format!("Scanning {total} files...");
            }
        }
        ScanEvent::Changed(r) => {
            state.log_line(format!("[CHANGE] {}", display_name(&r.path)));
            state.log_line(format!("  Old: {} - {}", r.old_artist, r.old_title));
            state.log_line(format!("  New: {} - {}", r.new_artist, r.new_title));
            state.log_line("");
        }
        ScanEvent::Skipped(r) => {
            state.log_line(format!(
                "[SKIP] {}: {}",
                display_name(&r.path),
                r.error.unwrap_or_default()
            ));
        }
        ScanEvent::Failed { path, error } => {
            state.log_line(format!("[ERROR] {}: {error}", display_name(&path)));
        }
        ScanEvent::Finished(summary) => finished(state, summary),
        ScanEvent::Fatal(msg) => {
            state.log_line(format!("[FATAL] {msg}"));
            state.status = format!("Scan failed: {msg}");
        }
    }
}

fn finished(state: &mut Retagger, summary: ScanSummary) {
    if summary.stopped {
        state.log_line("");
        state.log_line("Stop requested by user.");
    } else if summary.scanned == 0 {
        // Already explained by the Started handler.
        return;
    }

    state.log_line(rule());
    state.log_line(format!("[DONE] Scanned {} files", summary.scanned));
    state.log_line(format!("  Files matched/updated: {}", summary.changed));

    state.status = if summary.stopped {
        format!("Stopped after {} files.", summary.scanned)
    } else if summary.errors > 0 {
        format!(
            "Done: {} of {} files matched ({} errors).",
            summary.changed, summary.scanned, summary.errors
        )
    } else {
        format!("Done: {} of {} files matched.", summary.changed, summary.scanned)
    };

    log::info!(
        "scan finished: scanned={} changed={} errors={} stopped={}",
        summary.scanned,
        summary.changed,
        summary.errors,
        summary.stopped
    );
}

/// Worker is gone; honour a close that arrived while it was running.
fn finish(state: &mut Retagger) -> Task<Message> {
    state.scan = None;
    state.scan_events = None;

    match state.close_pending.take() {
        Some(id) => window::close(id),
        None => Task::none(),
    }
}
