/// Error types shared by the file layer and the viewer session
///
/// Every failure here is local and user-visible: the GUI turns it into
/// status bar text and keeps running.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// The chosen directory could not be listed
    #[error("Cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The image file exists but could not be decoded
    #[error("{}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// File extension is not one of png, jpeg, jpg, bmp
    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Removing the file from disk failed
    #[error("Cannot delete {}: {source}", path.display())]
    RemoveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation needs a decoded image and there is none
    #[error("No image loaded")]
    NoImage,

    /// Crop selection has zero width or height
    #[error("Crop selection is empty")]
    EmptyCrop,
}

pub type Result<T> = std::result::Result<T, ViewerError>;
