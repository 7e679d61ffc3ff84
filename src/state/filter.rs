/// Live hue/saturation/value adjustment
///
/// The filter holds three offsets and is applied to the decoded source image
/// every time a slider moves. It is never written to disk; the only thing
/// that survives navigation is the offsets themselves, and only when
/// `persist` is switched on.

use image::RgbImage;

use crate::color::{self, HUE_STEPS};

/// Upper bound of the saturation and value offsets
pub const CHANNEL_MAX: u8 = 255;

/// Largest hue offset the slider exposes (hue wraps at 180)
pub const HUE_MAX: u8 = (HUE_STEPS - 1) as u8;

/// Adjustment parameters for the current image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HsvFilter {
    /// Hue offset in half-degrees (0 to 179)
    /// - Added to every pixel's hue modulo 180
    /// - 0 = no adjustment
    hue: u8,

    /// Saturation offset (0 to 255)
    /// - Added to every pixel's saturation, clamped at 255
    /// - 0 = no adjustment
    saturation: u8,

    /// Value offset (0 to 255)
    /// - Added to every pixel's value, clamped at 255
    /// - 0 = no adjustment
    value: u8,

    /// Replay the offsets onto the next image instead of resetting them
    persist: bool,
}

impl HsvFilter {
    /// Create a filter with no adjustment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hue(&self) -> u8 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn persist(&self) -> bool {
        self.persist
    }

    /// Set the hue offset; any integer is accepted and wrapped into [0, 180)
    pub fn set_hue(&mut self, hue: i32) {
        self.hue = hue.rem_euclid(HUE_STEPS as i32) as u8;
    }

    /// Set the saturation offset, clamped to [0, 255]
    pub fn set_saturation(&mut self, saturation: i32) {
        self.saturation = clamp_offset(saturation);
    }

    /// Set the value offset, clamped to [0, 255]
    pub fn set_value(&mut self, value: i32) {
        self.value = clamp_offset(value);
    }

    pub fn set_persist(&mut self, persist: bool) {
        self.persist = persist;
    }

    /// Check if the offsets leave the image untouched
    pub fn is_identity(&self) -> bool {
        self.hue == 0 && self.saturation == 0 && self.value == 0
    }

    /// Reset all offsets to zero, keeping the persist flag
    pub fn reset(&mut self) {
        self.hue = 0;
        self.saturation = 0;
        self.value = 0;
    }

    /// Called when a different image becomes current
    pub fn on_navigate(&mut self) {
        if !self.persist {
            self.reset();
        }
    }

    /// Adjust a single RGB pixel
    pub fn apply_pixel(&self, rgb: [u8; 3]) -> [u8; 3] {
        let [h, s, v] = color::rgb_to_hsv(rgb);
        let hue = ((h as u16 + self.hue as u16) % HUE_STEPS) as u8;
        let hsv = [
            hue,
            shift_channel(s, self.saturation as i32),
            shift_channel(v, self.value as i32),
        ];
        color::hsv_to_rgb(hsv)
    }

    /// Produce the adjusted copy of `source`
    ///
    /// With all offsets at zero the source is returned pixel-for-pixel,
    /// skipping the lossy round trip through 8-bit HSV.
    pub fn apply(&self, source: &RgbImage) -> RgbImage {
        if self.is_identity() {
            return source.clone();
        }

        let mut output = source.clone();
        for pixel in output.pixels_mut() {
            pixel.0 = self.apply_pixel(pixel.0);
        }
        output
    }
}

/// Add an offset to an 8-bit channel, saturating instead of wrapping
pub fn shift_channel(channel: u8, offset: i32) -> u8 {
    (channel as i32 + offset).clamp(0, CHANNEL_MAX as i32) as u8
}

fn clamp_offset(offset: i32) -> u8 {
    offset.clamp(0, CHANNEL_MAX as i32) as u8
}
