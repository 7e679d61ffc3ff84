use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, ViewerError};

/// Image extensions the viewer opens (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpeg", "jpg", "bmp"];

/// Check if a path has one of the supported image extensions
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// List the image files directly inside `dir`
///
/// Subdirectories are not entered. Entries are returned sorted by file name
/// so the browsing order is stable across platforms. An empty result is not
/// an error; only failing to read `dir` itself is.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(ViewerError::ReadDir {
                    path: dir.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                log::warn!("⚠️  Skipping unreadable entry: {}", err);
                continue;
            }
        };

        // Only regular files (not directories named like images)
        if !entry.file_type().is_file() {
            continue;
        }

        if is_supported(entry.path()) {
            images.push(entry.into_path());
        }
    }

    log::info!("🔍 Found {} images in {}", images.len(), dir.display());
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        assert!(is_supported(Path::new("a.png")));
        assert!(is_supported(Path::new("b.JPG")));
        assert!(is_supported(Path::new("c.Jpeg")));
        assert!(is_supported(Path::new("/x/y/d.BMP")));
        assert!(!is_supported(Path::new("e.gif")));
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("png")));
    }

    #[test]
    fn test_scan_keeps_only_images_sorted() {
        let dir = tempdir().unwrap();
        for name in ["b.jpg", "a.PNG", "readme.txt", "c.bmp", "d.gif"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let found = scan_directory(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.PNG", "b.jpg", "c.bmp"]);
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested.png");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("inner.png"), b"x").unwrap();
        fs::write(dir.path().join("top.png"), b"x").unwrap();

        let found = scan_directory(dir.path()).unwrap();
        assert_eq!(found, vec![dir.path().join("top.png")]);
    }

    #[test]
    fn test_scan_without_images_is_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();

        assert!(scan_directory(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = scan_directory(&missing);
        assert!(matches!(result, Err(ViewerError::ReadDir { .. })));
    }
}
