//! gui/update/options.rs
//! Control edits. Run options are frozen while a scan is in flight;
//! the worker already holds its own copy.

use std::path::{Path, PathBuf};

use iced::Task;

use super::super::state::{Message, Retagger};

pub(crate) fn root_input_changed(state: &mut Retagger, s: String) -> Task<Message> {
    if !state.is_running() {
        state.root_input = s;
    }
    Task::none()
}

/// Open the native folder picker, starting at the current folder when it exists.
pub(crate) fn browse_folder(state: &mut Retagger) -> Task<Message> {
    if state.is_running() {
        return Task::none();
    }

    let start = Path::new(state.root_input.trim());
    let start = start.is_dir().then(|| start.to_path_buf());

    Task::perform(pick_folder(start), Message::FolderPicked)
}

async fn pick_folder(start: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new().set_title("Select Music Folder");
    if let Some(dir) = start {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_folder().await.map(|handle| handle.path().to_path_buf())
}

/// `None` = dialog cancelled; keep whatever was there.
pub(crate) fn folder_picked(state: &mut Retagger, picked: Option<PathBuf>) -> Task<Message> {
    if state.is_running() {
        return Task::none();
    }
    if let Some(dir) = picked {
        state.root_input = dir.display().to_string();
    }
    Task::none()
}

pub(crate) fn delimiter_changed(state: &mut Retagger, s: String) -> Task<Message> {
    if !state.is_running() {
        state.delimiter = s;
    }
    Task::none()
}

pub(crate) fn toggle_album_artist(state: &mut Retagger, v: bool) -> Task<Message> {
    if !state.is_running() {
        state.set_albumartist = v;
    }
    Task::none()
}

pub(crate) fn toggle_subfolders(state: &mut Retagger, v: bool) -> Task<Message> {
    if !state.is_running() {
        state.scan_subfolders = v;
    }
    Task::none()
}

pub(crate) fn toggle_write_mode(state: &mut Retagger, v: bool) -> Task<Message> {
    if !state.is_running() {
        state.write_mode = v;
    }
    Task::none()
}

/// Always allowed, even mid-scan.
pub(crate) fn toggle_appearance(state: &mut Retagger) -> Task<Message> {
    state.appearance = state.appearance.toggled();
    Task::none()
}
