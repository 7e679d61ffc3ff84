/// State management module
///
/// This module handles all viewer state, independent of the GUI toolkit:
/// - The ordered list of images and the current position (image_set.rs)
/// - Shared data structures for what is on screen (data.rs)
/// - The hue/saturation/value adjustment (filter.rs)
/// - The session tying them together, one handler per user action (viewer.rs)

pub mod data;
pub mod filter;
pub mod image_set;
pub mod viewer;
