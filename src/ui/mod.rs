/// View building blocks
///
/// - `toolbar.rs` - top bar (open, crop, exit) and bottom status bar
/// - `panel.rs` - side panel with navigation buttons and HSV sliders
/// - `canvas.rs` - crop selection overlay drawn over the image

pub mod canvas;
pub mod panel;
pub mod toolbar;

use iced::widget::image::Handle;
use image::RgbImage;

/// Upload an RGB buffer as an iced image handle (iced wants RGBA)
pub fn to_handle(rendered: &RgbImage) -> Handle {
    let rgba: Vec<u8> = rendered
        .pixels()
        .flat_map(|pixel| [pixel[0], pixel[1], pixel[2], u8::MAX])
        .collect();
    Handle::from_rgba(rendered.width(), rendered.height(), rgba)
}
