use image::imageops;
use std::path::{Path, PathBuf};

use super::data::{CropRegion, Display, Picture};
use super::filter::HsvFilter;
use super::image_set::ImageSet;
use crate::config::Settings;
use crate::error::{Result, ViewerError};
use crate::files;

/// Application name shown in the window title
pub const APP_NAME: &str = "HueView";

/// Which navigation controls are usable right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub can_previous: bool,
    pub can_next: bool,
    pub can_delete: bool,
}

/// The browsing session: image list, filter, and what is on screen.
///
/// Each public `&mut self` method is the handler for one user action and
/// leaves the session ready to be drawn. Nothing here depends on the GUI
/// toolkit, so every behaviour can be exercised without opening a window.
#[derive(Debug)]
pub struct Viewer {
    images: ImageSet,
    filter: HsvFilter,
    display: Display,
    /// Delete also removes the file from disk
    remove_files: bool,
}

impl Viewer {
    pub fn new(settings: &Settings) -> Self {
        let mut filter = HsvFilter::new();
        filter.set_persist(settings.persist_filter);

        Self {
            images: ImageSet::new(),
            filter,
            display: Display::NoImage,
            remove_files: !settings.keep_files,
        }
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn filter(&self) -> &HsvFilter {
        &self.filter
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Decoded picture on screen, if any
    pub fn picture(&self) -> Option<&Picture> {
        match &self.display {
            Display::Image(picture) => Some(picture),
            _ => None,
        }
    }

    // ========== Opening ==========

    /// Replace the session with the images of `dir`
    pub fn open_directory(&mut self, dir: &Path) -> Result<()> {
        self.images = ImageSet::open_directory(dir)?;
        log::info!("📁 Opened {} ({} images)", dir.display(), self.images.len());

        self.filter.on_navigate();
        if self.images.is_empty() {
            self.display = Display::EmptyDirectory;
        } else {
            self.load_current();
        }
        Ok(())
    }

    /// Replace the session with a single image
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        self.images = ImageSet::open_file(path)?;
        log::info!("🖼️  Opened {}", path.display());

        self.filter.on_navigate();
        self.load_current();
        Ok(())
    }

    /// Open whatever `path` is: a directory or an image file
    pub fn open_path(&mut self, path: &Path) -> Result<()> {
        if path.is_dir() {
            self.open_directory(path)
        } else {
            self.open_file(path)
        }
    }

    // ========== Navigation ==========

    /// Show the next image; no-op on the last one
    pub fn next(&mut self) -> bool {
        let moved = self.images.next();
        if moved {
            self.on_image_changed();
        }
        moved
    }

    /// Show the previous image; no-op on the first one
    pub fn previous(&mut self) -> bool {
        let moved = self.images.previous();
        if moved {
            self.on_image_changed();
        }
        moved
    }

    /// Delete the current image once the user has confirmed
    ///
    /// Without confirmation nothing happens. If the file cannot be removed
    /// from disk the list is left as it was. Returns the deleted path.
    pub fn delete_current(&mut self, confirmed: bool) -> Result<Option<PathBuf>> {
        if !confirmed {
            return Ok(None);
        }

        let path = self
            .images
            .current_path()
            .ok_or(ViewerError::NoImage)?
            .to_path_buf();

        if self.remove_files {
            std::fs::remove_file(&path).map_err(|source| ViewerError::RemoveFile {
                path: path.clone(),
                source,
            })?;
        }

        let removed = self.images.remove_current();
        log::info!(
            "🗑️  Deleted {} ({} images left)",
            path.display(),
            self.images.len()
        );

        self.on_image_changed();
        Ok(removed)
    }

    // ========== Filter ==========

    pub fn set_hue(&mut self, hue: i32) {
        self.filter.set_hue(hue);
        self.refresh();
    }

    pub fn set_saturation(&mut self, saturation: i32) {
        self.filter.set_saturation(saturation);
        self.refresh();
    }

    pub fn set_value(&mut self, value: i32) {
        self.filter.set_value(value);
        self.refresh();
    }

    pub fn set_persist(&mut self, persist: bool) {
        self.filter.set_persist(persist);
    }

    // ========== Crop ==========

    /// Crop the in-memory image to `region` (clamped to the image)
    ///
    /// The file on disk is untouched; coming back to this entry later
    /// decodes the full image again.
    pub fn crop(&mut self, region: CropRegion) -> Result<()> {
        let Display::Image(picture) = &mut self.display else {
            return Err(ViewerError::NoImage);
        };

        let (width, height) = picture.source.dimensions();
        let region = region.clamp_to(width, height);
        if region.is_empty() {
            return Err(ViewerError::EmptyCrop);
        }

        picture.source =
            imageops::crop_imm(&picture.source, region.x, region.y, region.width, region.height)
                .to_image();
        log::info!("✂️  Cropped to {}x{}", region.width, region.height);

        self.refresh();
        Ok(())
    }

    // ========== Display refresh ==========

    /// Window title: app name, file name and position
    pub fn title(&self) -> String {
        match (self.images.current_name(), self.images.position_label()) {
            (Some(name), Some(position)) => format!("{} - {} ({})", APP_NAME, name, position),
            _ => APP_NAME.to_string(),
        }
    }

    /// Status bar text for the current display
    pub fn status(&self) -> String {
        match &self.display {
            Display::NoImage => "No image".to_string(),
            Display::EmptyDirectory => "No images found in directory".to_string(),
            Display::DecodeFailed { reason, .. } => format!("Error loading image: {}", reason),
            Display::Image(picture) => format!(
                "Width: {}, Height: {}, Channels: {}",
                picture.width(),
                picture.height(),
                picture.channels()
            ),
        }
    }

    pub fn navigation(&self) -> NavigationState {
        NavigationState {
            can_previous: self.images.has_previous(),
            can_next: self.images.has_next(),
            can_delete: !self.images.is_empty(),
        }
    }

    fn on_image_changed(&mut self) {
        log::debug!("Current index: {}", self.images.position());
        self.filter.on_navigate();
        self.load_current();
    }

    /// Decode the current entry and render it with the filter
    fn load_current(&mut self) {
        let Some(path) = self.images.current_path() else {
            self.display = Display::NoImage;
            return;
        };

        self.display = match files::load_rgb(path) {
            Ok(source) => Display::Image(Picture {
                rendered: self.filter.apply(&source),
                source,
            }),
            Err(err) => {
                log::warn!("❌ {}: {}", path.display(), err);
                Display::DecodeFailed {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                }
            }
        };
    }

    /// Re-derive the rendered buffer after a filter or crop change
    fn refresh(&mut self) {
        if let Display::Image(picture) = &mut self.display {
            picture.rendered = self.filter.apply(&picture.source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    /// Directory with `count` solid-color PNGs named img_0.png, img_1.png, ...
    fn fixture(count: usize) -> TempDir {
        let dir = tempdir().unwrap();
        for i in 0..count {
            let shade = (i * 40) as u8;
            RgbImage::from_pixel(4 + i as u32, 3, Rgb([200, shade, 10]))
                .save(dir.path().join(format!("img_{}.png", i)))
                .unwrap();
        }
        dir
    }

    fn viewer() -> Viewer {
        Viewer::new(&Settings::default())
    }

    fn current_name(viewer: &Viewer) -> Option<String> {
        viewer.images().current_name()
    }

    #[test]
    fn test_new_viewer_shows_nothing() {
        let viewer = viewer();
        assert_eq!(viewer.display(), &Display::NoImage);
        assert_eq!(viewer.title(), "HueView");
        assert_eq!(viewer.navigation(), NavigationState::default());
    }

    #[test]
    fn test_open_directory_shows_first_image() {
        let dir = fixture(3);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();

        assert_eq!(viewer.images().position(), 0);
        assert_eq!(viewer.title(), "HueView - img_0.png (1 / 3)");
        assert_eq!(viewer.status(), "Width: 4, Height: 3, Channels: 3");
        assert_eq!(
            viewer.navigation(),
            NavigationState {
                can_previous: false,
                can_next: true,
                can_delete: true
            }
        );
    }

    #[test]
    fn test_directory_without_images_is_empty_state() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        fs::write(dir.path().join("data.csv"), b"1,2,3").unwrap();

        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();

        assert_eq!(viewer.display(), &Display::EmptyDirectory);
        assert_eq!(viewer.status(), "No images found in directory");
        assert_eq!(viewer.images().position(), -1);
        assert_eq!(viewer.navigation(), NavigationState::default());
    }

    #[test]
    fn test_navigation_updates_title_and_buttons() {
        let dir = fixture(3);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();

        assert!(viewer.next());
        assert!(viewer.next());
        assert!(!viewer.next());
        assert_eq!(viewer.title(), "HueView - img_2.png (3 / 3)");
        assert_eq!(viewer.status(), "Width: 6, Height: 3, Channels: 3");
        assert!(!viewer.navigation().can_next);
        assert!(viewer.navigation().can_previous);

        assert!(viewer.previous());
        assert_eq!(current_name(&viewer).as_deref(), Some("img_1.png"));
    }

    #[test]
    fn test_corrupt_entry_stays_navigable() {
        let dir = fixture(2);
        fs::write(dir.path().join("img_1.png"), b"garbage").unwrap();

        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();
        viewer.next();

        assert!(matches!(viewer.display(), Display::DecodeFailed { .. }));
        assert!(viewer.status().starts_with("Error loading image"));
        assert_eq!(viewer.images().len(), 2);
        assert_eq!(viewer.title(), "HueView - img_1.png (2 / 2)");

        assert!(viewer.previous());
        assert!(viewer.picture().is_some());
    }

    #[test]
    fn test_delete_without_confirmation_is_noop() {
        let dir = fixture(2);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();

        assert_eq!(viewer.delete_current(false).unwrap(), None);
        assert_eq!(viewer.images().len(), 2);
        assert!(dir.path().join("img_0.png").exists());
    }

    #[test]
    fn test_delete_first_of_three_shows_former_second() {
        let dir = fixture(3);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();

        let removed = viewer.delete_current(true).unwrap();

        assert_eq!(removed, Some(dir.path().join("img_0.png")));
        assert!(!dir.path().join("img_0.png").exists());
        assert_eq!(viewer.images().position(), 0);
        assert_eq!(current_name(&viewer).as_deref(), Some("img_1.png"));
        assert_eq!(viewer.status(), "Width: 5, Height: 3, Channels: 3");
        assert_eq!(viewer.title(), "HueView - img_1.png (1 / 2)");
    }

    #[test]
    fn test_delete_tail_shows_new_last() {
        let dir = fixture(3);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();
        viewer.next();
        viewer.next();

        viewer.delete_current(true).unwrap();

        assert_eq!(viewer.images().position(), 1);
        assert_eq!(current_name(&viewer).as_deref(), Some("img_1.png"));
        assert!(viewer.picture().is_some());
        assert!(!viewer.navigation().can_next);
    }

    #[test]
    fn test_delete_only_image_leaves_no_image() {
        let dir = fixture(1);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();

        viewer.delete_current(true).unwrap();

        assert_eq!(viewer.images().position(), -1);
        assert_eq!(viewer.display(), &Display::NoImage);
        assert_eq!(viewer.title(), "HueView");
        assert_eq!(viewer.navigation(), NavigationState::default());
        assert!(matches!(
            viewer.delete_current(true),
            Err(ViewerError::NoImage)
        ));
    }

    #[test]
    fn test_keep_files_only_removes_from_list() {
        let dir = fixture(2);
        let settings = Settings {
            keep_files: true,
            ..Settings::default()
        };
        let mut viewer = Viewer::new(&settings);
        viewer.open_directory(dir.path()).unwrap();

        viewer.delete_current(true).unwrap();

        assert_eq!(viewer.images().len(), 1);
        assert!(dir.path().join("img_0.png").exists());
    }

    #[test]
    fn test_failed_disk_delete_keeps_entry() {
        let dir = fixture(2);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();
        fs::remove_file(dir.path().join("img_0.png")).unwrap();

        let result = viewer.delete_current(true);

        assert!(matches!(result, Err(ViewerError::RemoveFile { .. })));
        assert_eq!(viewer.images().len(), 2);
    }

    #[test]
    fn test_open_file_builds_single_entry_set() {
        let dir = fixture(2);
        let mut viewer = viewer();
        viewer.open_file(&dir.path().join("img_1.png")).unwrap();

        assert_eq!(viewer.title(), "HueView - img_1.png (1 / 1)");
        assert!(!viewer.navigation().can_next);
        assert!(!viewer.navigation().can_previous);
    }

    #[test]
    fn test_open_unsupported_file_keeps_state() {
        let dir = fixture(2);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();

        let result = viewer.open_file(&dir.path().join("movie.gif"));

        assert!(matches!(result, Err(ViewerError::UnsupportedFormat(_))));
        assert_eq!(viewer.images().len(), 2);
    }

    #[test]
    fn test_open_path_detects_directory() {
        let dir = fixture(2);
        let mut viewer = viewer();
        viewer.open_path(dir.path()).unwrap();
        assert_eq!(viewer.images().len(), 2);

        viewer.open_path(&dir.path().join("img_0.png")).unwrap();
        assert_eq!(viewer.images().len(), 1);
    }

    #[test]
    fn test_slider_change_rerenders() {
        let dir = fixture(1);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();

        viewer.set_value(255);
        let picture = viewer.picture().unwrap();
        assert_ne!(picture.rendered, picture.source);

        viewer.set_value(0);
        let picture = viewer.picture().unwrap();
        assert_eq!(picture.rendered, picture.source);
    }

    #[test]
    fn test_filter_resets_on_navigation_without_persist() {
        let dir = fixture(2);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();
        viewer.set_hue(40);
        viewer.set_saturation(20);

        viewer.next();

        assert!(viewer.filter().is_identity());
        let picture = viewer.picture().unwrap();
        assert_eq!(picture.rendered, picture.source);
    }

    #[test]
    fn test_persisted_filter_replays_on_next_image() {
        let dir = fixture(2);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();
        viewer.set_persist(true);
        viewer.set_hue(40);

        viewer.next();

        assert_eq!(viewer.filter().hue(), 40);
        let picture = viewer.picture().unwrap();
        assert_eq!(picture.rendered, viewer.filter().apply(&picture.source));
        assert_ne!(picture.rendered, picture.source);
    }

    #[test]
    fn test_persist_from_settings() {
        let settings = Settings {
            persist_filter: true,
            ..Settings::default()
        };
        let viewer = Viewer::new(&settings);
        assert!(viewer.filter().persist());
    }

    #[test]
    fn test_crop_replaces_source_and_keeps_filter() {
        let dir = fixture(3);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();
        viewer.next();
        viewer.set_value(30);

        viewer
            .crop(CropRegion {
                x: 1,
                y: 1,
                width: 2,
                height: 2,
            })
            .unwrap();

        let picture = viewer.picture().unwrap();
        assert_eq!(picture.source.dimensions(), (2, 2));
        assert_eq!(picture.rendered, viewer.filter().apply(&picture.source));
        assert_eq!(viewer.status(), "Width: 2, Height: 2, Channels: 3");
    }

    #[test]
    fn test_crop_is_clamped_and_rejects_empty() {
        let dir = fixture(1);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();

        let empty = CropRegion {
            x: 2,
            y: 2,
            width: 0,
            height: 5,
        };
        assert!(matches!(viewer.crop(empty), Err(ViewerError::EmptyCrop)));

        viewer
            .crop(CropRegion {
                x: 2,
                y: 0,
                width: 100,
                height: 100,
            })
            .unwrap();
        assert_eq!(viewer.picture().unwrap().source.dimensions(), (2, 3));
    }

    #[test]
    fn test_crop_without_image_fails() {
        let mut viewer = viewer();
        let result = viewer.crop(CropRegion::from_corners((0, 0), (10, 10)));
        assert!(matches!(result, Err(ViewerError::NoImage)));
    }

    #[test]
    fn test_crop_is_undone_by_revisiting() {
        let dir = fixture(2);
        let mut viewer = viewer();
        viewer.open_directory(dir.path()).unwrap();
        viewer.crop(CropRegion::from_corners((0, 0), (2, 2))).unwrap();

        viewer.next();
        viewer.previous();

        assert_eq!(viewer.picture().unwrap().source.dimensions(), (4, 3));
    }
}
