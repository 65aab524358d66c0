//! core/library.rs
//! Find the `.mp3` files under a root folder.

use std::path::{Path, PathBuf};

use super::error::RetagError;

/// Discover MP3 files under `root`, sorted by path.
///
/// - `recursive == false` only looks at the top level
/// - extension match is case-insensitive
/// - an empty folder is `Ok(vec![])`, a missing root is `PathNotFound`
pub fn scan_mp3s(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, RetagError> {
    if !root.exists() {
        return Err(RetagError::PathNotFound(root.to_path_buf()));
    }

    let mut out = Vec::new();
    if root.is_dir() {
        walk_dir(root, recursive, &mut out)?;
    } else if is_mp3(root) {
        out.push(root.to_path_buf());
    }

    out.sort();
    log::debug!("found {} mp3 file(s) under {}", out.len(), root.display());
    Ok(out)
}

fn walk_dir(dir: &Path, recursive: bool, out: &mut Vec<PathBuf>) -> Result<(), RetagError> {
    let walk_err = |source: std::io::Error| RetagError::Walk {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(walk_err)? {
        let entry = entry.map_err(walk_err)?;
        let path = entry.path();

        // `file_type` does not follow symlinks: linked folders are never entered,
        // linked files still count.
        if entry.file_type().map_err(walk_err)?.is_dir() {
            if recursive {
                walk_dir(&path, recursive, out)?;
            }
        } else if is_mp3(&path) && !path.is_dir() {
            out.push(path);
        }
    }

    Ok(())
}

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    fn touch(path: PathBuf) -> PathBuf {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
        path
    }

    fn library() -> (TempDir, Vec<PathBuf>) {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let files = vec![
            touch(root.join("b.mp3")),
            touch(root.join("A.MP3")),
            touch(root.join("notes.txt")),
            touch(root.join("sub/c.mp3")),
            touch(root.join("sub/deeper/d.Mp3")),
            touch(root.join("sub/cover.jpg")),
        ];
        (dir, files)
    }

    #[test]
    fn recursive_scan_finds_everything_sorted() {
        let (dir, _) = library();
        let root = dir.path();

        let found = scan_mp3s(root, true).unwrap();
        assert_eq!(
            found,
            vec![
                root.join("A.MP3"),
                root.join("b.mp3"),
                root.join("sub/c.mp3"),
                root.join("sub/deeper/d.Mp3"),
            ]
        );
    }

    #[test]
    fn top_level_scan_skips_subfolders() {
        let (dir, _) = library();
        let root = dir.path();

        let found = scan_mp3s(root, false).unwrap();
        assert_eq!(found, vec![root.join("A.MP3"), root.join("b.mp3")]);
    }

    #[test]
    fn empty_and_top_level_only_misses_are_not_errors() {
        let dir = TempDir::new().unwrap();
        assert!(scan_mp3s(dir.path(), true).unwrap().is_empty());

        touch(dir.path().join("sub/only.mp3"));
        assert!(scan_mp3s(dir.path(), false).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_path_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            scan_mp3s(&missing, true),
            Err(RetagError::PathNotFound(p)) if p == missing
        ));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_folders_are_not_followed() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let song = touch(root.join("a.mp3"));
        symlink(root, root.join("loop")).unwrap();
        symlink(&song, root.join("link.mp3")).unwrap();

        let found = scan_mp3s(root, true).unwrap();
        assert_eq!(found, vec![root.join("a.mp3"), root.join("link.mp3")]);
    }

    #[test]
    fn single_file_root() {
        let (dir, _) = library();
        let file = dir.path().join("b.mp3");
        assert_eq!(scan_mp3s(&file, true).unwrap(), vec![file]);
    }
}
