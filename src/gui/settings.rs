//! gui/settings.rs
//! Presentation settings persisted between runs.
//!
//! Lives at `<config dir>/retagger/settings.json`, where `<config dir>` is the
//! platform's per-user config folder (`$XDG_CONFIG_HOME` or `~/.config` on Linux,
//! `~/Library/Application Support` on macOS, `%APPDATA%` on Windows).
//! - Missing keys take their default
//! - Missing or corrupt file => all defaults
//!
//! Never feeds the core directly; the scan reads the live controls instead.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "retagger";
const FILE_NAME: &str = "settings.json";

pub(crate) const DEFAULT_WINDOW: (f32, f32) = (700.0, 600.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AppearanceMode {
    #[default]
    Dark,
    Light,
}

impl AppearanceMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            AppearanceMode::Dark => AppearanceMode::Light,
            AppearanceMode::Light => AppearanceMode::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub appearance_mode: AppearanceMode,
    pub last_directory: String,
    pub delimiter: String,
    /// "WIDTHxHEIGHT", e.g. "700x600"
    pub window_size: String,
    pub update_album_artist: bool,
    pub scan_subfolders: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            appearance_mode: AppearanceMode::Dark,
            last_directory: String::new(),
            delimiter: "/".to_string(),
            window_size: "700x600".to_string(),
            update_album_artist: false,
            scan_subfolders: false,
        }
    }
}

impl Settings {
    /// Parse `window_size`; `None` if it isn't two positive integers.
    pub(crate) fn window_dimensions(&self) -> Option<(f32, f32)> {
        let (w, h) = self.window_size.trim().split_once('x')?;
        let w = w.trim().parse::<u32>().ok().filter(|w| *w > 0)?;
        let h = h.trim().parse::<u32>().ok().filter(|h| *h > 0)?;
        Some((w as f32, h as f32))
    }

    pub(crate) fn set_window_dimensions(&mut self, width: f32, height: f32) {
        self.window_size = format!("{}x{}", width.round() as u32, height.round() as u32);
    }
}

pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(FILE_NAME))
}

/// Load from the per-user location, falling back to defaults.
pub(crate) fn load() -> Settings {
    match config_path() {
        Some(path) => load_from(&path),
        None => Settings::default(),
    }
}

pub(crate) fn load_from(path: &Path) -> Settings {
    let Ok(raw) = fs::read_to_string(path) else {
        return Settings::default();
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("ignoring unreadable settings {}: {e}", path.display());
            Settings::default()
        }
    }
}

pub(crate) fn save(settings: &Settings) -> Result<()> {
    let path = config_path().context("no per-user config directory on this platform")?;
    save_to(&path, settings)
}

pub(crate) fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;

    log::debug!("settings saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_from(&dir.path().join("settings.json")), Settings::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_from(&path), Settings::default());

        fs::write(&path, r#"{"appearance_mode": "purple"}"#).unwrap();
        assert_eq!(load_from(&path), Settings::default());
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"delimiter": ";", "scan_subfolders": true, "extra": 1}"#).unwrap();

        let s = load_from(&path);
        assert_eq!(s.delimiter, ";");
        assert!(s.scan_subfolders);
        assert_eq!(s.appearance_mode, AppearanceMode::Dark);
        assert_eq!(s.window_size, "700x600");
        assert!(!s.update_album_artist);
    }

    #[test]
    fn save_creates_dirs_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("retagger").join("settings.json");

        let settings = Settings {
            appearance_mode: AppearanceMode::Light,
            last_directory: "/music".to_string(),
            delimiter: " & ".to_string(),
            window_size: "1024x768".to_string(),
            update_album_artist: true,
            scan_subfolders: true,
        };
        save_to(&path, &settings).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""appearance_mode": "light""#));
        assert_eq!(load_from(&path), settings);
    }

    #[test]
    fn window_dimensions_parse() {
        let mut s = Settings::default();
        assert_eq!(s.window_dimensions(), Some((700.0, 600.0)));

        s.set_window_dimensions(1023.6, 480.2);
        assert_eq!(s.window_size, "1024x480");

        for bad in ["", "700", "0x600", "axb", "700x-1"] {
            s.window_size = bad.to_string();
            assert_eq!(s.window_dimensions(), None, "{bad:?}");
        }
    }

    #[test]
    fn config_path_is_per_user_app_file() {
        if let Some(path) = config_path() {
            assert!(path.ends_with(Path::new(APP_NAME).join(FILE_NAME)));
            assert_eq!(path.parent().and_then(Path::parent), dirs::config_dir().as_deref());
        }
    }

    #[test]
    fn appearance_toggles() {
        assert_eq!(AppearanceMode::Dark.toggled(), AppearanceMode::Light);
        assert_eq!(AppearanceMode::Light.toggled(), AppearanceMode::Dark);
    }
}
