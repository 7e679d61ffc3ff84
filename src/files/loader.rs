/// Image decoder
///
/// Decodes a file from disk into the 3-channel, 8-bit buffer the rest of
/// the viewer works with. Alpha and 16-bit data are flattened to RGB8.

use image::RgbImage;
use std::path::Path;

use crate::error::{Result, ViewerError};

/// Decode the image at `path` into an RGB buffer
///
/// Runs on the calling thread; decoding a typical photo takes a few tens of
/// milliseconds which is acceptable for manual browsing.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|source| ViewerError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = decoded.to_rgb8();
    log::debug!(
        "📷 Decoded {}: {}x{} ({:?})",
        path.display(),
        rgb.width(),
        rgb.height(),
        decoded.color()
    );

    Ok(rgb)
}
