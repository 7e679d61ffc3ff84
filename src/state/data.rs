/// Shared data structures for the viewer state
///
/// These structs represent what the session hands to the UI layer:
/// the current picture (or the reason there is none) and crop selections.

use image::RgbImage;
use std::path::PathBuf;

/// What the central image area shows
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// Nothing opened yet, or the last image was deleted
    NoImage,
    /// A directory was opened but held no supported images
    EmptyDirectory,
    /// The current entry could not be decoded; it stays in the set
    DecodeFailed { path: PathBuf, reason: String },
    /// A decoded picture
    Image(Picture),
}

/// A decoded source image and its filtered rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    /// Pixels as decoded from disk (or cropped in memory)
    pub source: RgbImage,
    /// `source` with the HSV filter applied; this is what gets drawn
    pub rendered: RgbImage,
}

impl Picture {
    pub fn width(&self) -> u32 {
        self.rendered.width()
    }

    pub fn height(&self) -> u32 {
        self.rendered.height()
    }

    /// Always 3: every image is flattened to RGB on load
    pub fn channels(&self) -> u8 {
        3
    }
}

/// Rectangle in source-image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Region spanned by two corner points, in any order
    pub fn from_corners((x0, y0): (u32, u32), (x1, y1): (u32, u32)) -> Self {
        Self {
            x: x0.min(x1),
            y: y0.min(y1),
            width: x0.abs_diff(x1),
            height: y0.abs_diff(y1),
        }
    }

    /// Intersect with the bounds of a `width` x `height` image
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            width: self.width.min(width - x),
            height: self.height.min(height - y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
