//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use iced::{Size, window};

use retagger::core::{ScanEvent, ScanHandle};

use super::settings::{AppearanceMode, DEFAULT_WINDOW, Settings};

/// App state
pub(crate) struct Retagger {
    pub status: String,
    pub appearance: AppearanceMode,

    // Controls
    pub root_input: String,
    pub delimiter: String,
    pub set_albumartist: bool,
    pub scan_subfolders: bool,
    /// Never persisted: every launch starts as a dry run.
    pub write_mode: bool,

    // Scan (both Some while a worker is running)
    pub scan: Option<ScanHandle>,
    pub scan_events: Option<Receiver<ScanEvent>>,
    /// Window to close once the running worker has drained.
    pub close_pending: Option<window::Id>,

    /// Process log, one entry per line.
    pub log: Vec<String>,

    pub window_size: Size,
}

impl Retagger {
    pub(crate) fn new(settings: Settings) -> Self {
        let (width, height) = settings.window_dimensions().unwrap_or(DEFAULT_WINDOW);

        Self {
            status: "Pick a folder, then Start.".to_string(),
            appearance: settings.appearance_mode,

            root_input: settings.last_directory,
            delimiter: settings.delimiter,
            set_albumartist: settings.update_album_artist,
            scan_subfolders: settings.scan_subfolders,
            write_mode: false,

            scan: None,
            scan_events: None,
            close_pending: None,

            log: Vec::new(),

            window_size: Size::new(width, height),
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.scan.is_some()
    }

    pub(crate) fn is_stopping(&self) -> bool {
        self.scan.as_ref().is_some_and(ScanHandle::is_stopping)
    }

    pub(crate) fn log_line(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    /// What gets written to settings.json on close.
    pub(crate) fn to_settings(&self) -> Settings {
        let mut settings = Settings {
            appearance_mode: self.appearance,
            last_directory: self.root_input.trim().to_string(),
            delimiter: self.delimiter.clone(),
            update_album_artist: self.set_albumartist,
            scan_subfolders: self.scan_subfolders,
            ..Settings::default()
        };
        settings.set_window_dimensions(self.window_size.width, self.window_size.height);
        settings
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Controls
    RootInputChanged(String),
    BrowseFolder,
    FolderPicked(Option<PathBuf>),
    DelimiterChanged(String),
    ToggleAlbumArtist(bool),
    ToggleSubfolders(bool),
    ToggleWriteMode(bool),
    ToggleAppearance,

    // Scan
    StartOrStop,
    TickScan,

    // Window
    WindowResized(Size),
    CloseRequested(window::Id),
}
