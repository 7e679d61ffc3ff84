/// File access module
///
/// This module handles:
/// - Listing the images of a directory (extension filter, no recursion)
/// - Validating single files picked by the user
/// - Decoding an image file into an 8-bit RGB buffer

pub mod loader;
pub mod scan;

pub use loader::load_rgb;
pub use scan::{is_supported, scan_directory, SUPPORTED_EXTENSIONS};
