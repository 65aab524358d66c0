//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

/// File name for log lines.
/// Ex: '/music/a/song.mp3' -> 'song.mp3'
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Horizontal rule used to frame a run in the process log.
pub(crate) fn rule() -> String {
    "-".repeat(50)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_the_file_name() {
        assert_eq!(display_name(Path::new("/music/a/song.mp3")), "song.mp3");
        assert_eq!(display_name(Path::new("song.mp3")), "song.mp3");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
