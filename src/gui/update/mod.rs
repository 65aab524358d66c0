//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Retagger};

mod lifecycle;
mod options;
mod scan;

pub(crate) fn update(state: &mut Retagger, message: Message) -> Task<Message> {
    match message {
        // Controls
        Message::RootInputChanged(s) => options::root_input_changed(state, s),
        Message::BrowseFolder => options::browse_folder(state),
        Message::FolderPicked(picked) => options::folder_picked(state, picked),
        Message::DelimiterChanged(s) => options::delimiter_changed(state, s),
        Message::ToggleAlbumArtist(v) => options::toggle_album_artist(state, v),
        Message::ToggleSubfolders(v) => options::toggle_subfolders(state, v),
        Message::ToggleWriteMode(v) => options::toggle_write_mode(state, v),
        Message::ToggleAppearance => options::toggle_appearance(state),

        // Scan
        Message::StartOrStop => scan::start_or_stop(state),
        Message::TickScan => scan::drain_events(state),

        // Window
        Message::WindowResized(size) => lifecycle::resized(state, size),
        Message::CloseRequested(id) => lifecycle::close_requested(state, id),
    }
}
