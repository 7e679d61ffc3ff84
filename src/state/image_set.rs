use std::path::{Path, PathBuf};

use crate::error::{Result, ViewerError};
use crate::files;

/// The ImageSet is the ordered list of files being browsed and the
/// position of the image on screen.
///
/// Invariant: `current` is `Some(i)` with `i < paths.len()` whenever
/// `paths` is non-empty, and `None` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet {
    paths: Vec<PathBuf>,
    current: Option<usize>,
}

impl ImageSet {
    /// Create an empty set (no image selected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an already filtered list, selecting the first entry
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        let current = if paths.is_empty() { None } else { Some(0) };
        Self { paths, current }
    }

    /// Load every image directly inside `dir`
    ///
    /// A directory without images gives an empty set, not an error.
    pub fn open_directory(dir: &Path) -> Result<Self> {
        let paths = files::scan_directory(dir)?;
        Ok(Self::from_paths(paths))
    }

    /// Build a one-entry set from a single file
    pub fn open_file(path: &Path) -> Result<Self> {
        if !files::is_supported(path) {
            return Err(ViewerError::UnsupportedFormat(path.to_path_buf()));
        }
        Ok(Self::from_paths(vec![path.to_path_buf()]))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Index of the current image, `None` when the set is empty
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Numeric position with `-1` standing for "no image"
    pub fn position(&self) -> i64 {
        self.current.map_or(-1, |index| index as i64)
    }

    /// Path of the current image
    pub fn current_path(&self) -> Option<&Path> {
        self.current.map(|index| self.paths[index].as_path())
    }

    /// File name of the current image (for the window title)
    pub fn current_name(&self) -> Option<String> {
        self.current_path()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
    }

    /// Human readable counter, e.g. "3 / 12"
    pub fn position_label(&self) -> Option<String> {
        self.current
            .map(|index| format!("{} / {}", index + 1, self.paths.len()))
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.current, Some(index) if index > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.current, Some(index) if index + 1 < self.paths.len())
    }

    /// Move to the next image, stopping at the last one
    ///
    /// Returns whether the position changed.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current = self.current.map(|index| index + 1);
        true
    }

    /// Move to the previous image, stopping at the first one
    ///
    /// Returns whether the position changed.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current = self.current.map(|index| index - 1);
        true
    }

    /// Remove the current entry and return its path
    ///
    /// Afterwards the index points at the entry that followed the removed
    /// one. When the tail was removed there is no such entry, so the index
    /// steps back to the new last entry. Removing the only entry leaves the
    /// set empty with no current image.
    pub fn remove_current(&mut self) -> Option<PathBuf> {
        let index = self.current?;
        let removed = self.paths.remove(index);

        self.current = if self.paths.is_empty() {
            None
        } else if index == self.paths.len() {
            Some(index - 1)
        } else {
            Some(index)
        };

        Some(removed)
    }
}
