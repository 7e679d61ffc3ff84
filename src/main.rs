use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::widget::{canvas, center, column, container, image, row, stack, text, vertical_rule};
use iced::{ContentFit, Element, Length, Subscription, Task, Theme};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

mod color;
mod config;
mod error;
mod files;
mod state;
mod ui;

use config::Settings;
use state::data::{CropRegion, Display};
use state::viewer::Viewer;

/// Main application state
struct HueView {
    /// Images, filter and what is on screen
    viewer: Viewer,
    /// GPU-ready copy of the rendered image
    handle: Option<image::Handle>,
    /// Present while the crop overlay is shown
    crop: Option<CropMode>,
    /// Last error or confirmation message for the status bar
    notice: Option<String>,
}

/// Crop overlay state
#[derive(Debug, Clone, Copy, Default)]
struct CropMode {
    /// Last region dragged out, in image pixels
    selection: Option<CropRegion>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// File menu
    OpenDirectory,
    OpenImage,
    Exit,
    /// Crop menu and overlay
    StartCrop,
    CropSelected(CropRegion),
    ApplyCrop,
    CancelCrop,
    /// Side panel and keyboard
    Delete,
    Previous,
    Next,
    HueChanged(u8),
    SaturationChanged(u8),
    ValueChanged(u8),
    PersistToggled(bool),
}

impl HueView {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let mut app = HueView {
            viewer: Viewer::new(&settings),
            handle: None,
            crop: None,
            notice: None,
        };

        if let Some(path) = &settings.path {
            let result = app.viewer.open_path(path);
            app.finish(result);
        }

        log::info!("🎨 {} ready", state::viewer::APP_NAME);
        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenDirectory => {
                // Show the native folder picker dialog
                if let Some(dir) = picker("Open Directory").pick_folder() {
                    self.crop = None;
                    let result = self.viewer.open_directory(&dir);
                    self.finish(result);
                }
            }
            Message::OpenImage => {
                let picked = picker("Open Image")
                    .add_filter("Images", &files::SUPPORTED_EXTENSIONS)
                    .pick_file();
                if let Some(path) = picked {
                    self.crop = None;
                    let result = self.viewer.open_file(&path);
                    self.finish(result);
                }
            }
            Message::Exit => return iced::exit(),

            Message::StartCrop => {
                if self.viewer.picture().is_some() {
                    self.crop = Some(CropMode::default());
                    self.notice = Some("Drag over the image to select the crop area".to_string());
                }
            }
            Message::CropSelected(region) => {
                if let Some(crop) = self.crop.as_mut() {
                    crop.selection = Some(region);
                    self.notice = Some(format!("Selection: {}x{}", region.width, region.height));
                }
            }
            Message::ApplyCrop => {
                if let Some(region) = self.crop.take().and_then(|crop| crop.selection) {
                    let result = self.viewer.crop(region);
                    self.finish(result);
                }
            }
            Message::CancelCrop => {
                self.crop = None;
                self.notice = None;
            }

            Message::Delete => {
                if self.viewer.navigation().can_delete {
                    self.crop = None;
                    let confirmed = self.confirm_delete();
                    let result = self.viewer.delete_current(confirmed).map(|_| ());
                    self.finish(result);
                }
            }
            Message::Previous => {
                self.crop = None;
                if self.viewer.previous() {
                    self.finish(Ok(()));
                }
            }
            Message::Next => {
                self.crop = None;
                if self.viewer.next() {
                    self.finish(Ok(()));
                }
            }

            Message::HueChanged(hue) => {
                self.viewer.set_hue(hue.into());
                self.sync_handle();
            }
            Message::SaturationChanged(saturation) => {
                self.viewer.set_saturation(saturation.into());
                self.sync_handle();
            }
            Message::ValueChanged(value) => {
                self.viewer.set_value(value.into());
                self.sync_handle();
            }
            Message::PersistToggled(persist) => {
                self.viewer.set_persist(persist);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let cropping = self.crop.is_some();
        let has_selection = self.crop.is_some_and(|crop| crop.selection.is_some());

        let top = ui::toolbar::top_bar(self.viewer.picture().is_some(), cropping, has_selection);
        let body = row![
            self.image_area(),
            vertical_rule(1),
            ui::panel::side_panel(&self.viewer),
        ];
        let status = ui::toolbar::status_bar(self.notice.as_deref(), self.viewer.status());

        column![top, body.height(Length::Fill), status].into()
    }

    /// Central area: the image, or a message when there is none
    fn image_area(&self) -> Element<Message> {
        let content: Element<Message> = match (self.viewer.display(), &self.handle) {
            (Display::Image(picture), Some(handle)) => {
                let picture_widget = image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill);

                if self.crop.is_some() {
                    let overlay = canvas(ui::canvas::CropOverlay {
                        image_size: picture.rendered.dimensions(),
                    })
                    .width(Length::Fill)
                    .height(Length::Fill);
                    stack![picture_widget, overlay].into()
                } else {
                    picture_widget.into()
                }
            }
            (Display::NoImage, _) => center(text("Open a directory or an image to start")).into(),
            (Display::EmptyDirectory, _) => center(text("No images found in directory")).into(),
            (Display::DecodeFailed { path, .. }, _) => center(text(format!(
                "Error loading image\n{}",
                path.display()
            )))
            .into(),
            (Display::Image(_), None) => center(text("")).into(),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(8)
            .into()
    }

    /// Keyboard shortcuts: arrows navigate, Delete deletes, Escape leaves crop mode
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }

    fn title(&self) -> String {
        self.viewer.title()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Ask before deleting the current image
    fn confirm_delete(&self) -> bool {
        let name = self.viewer.images().current_name().unwrap_or_default();
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Confirm Delete")
            .set_description(format!("Are you sure you want to delete {}?", name))
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(answer, MessageDialogResult::Yes)
    }

    /// Record the outcome of an action and refresh the image
    fn finish(&mut self, result: error::Result<()>) {
        match result {
            Ok(()) => self.notice = None,
            Err(err) => {
                log::warn!("⚠️  {}", err);
                self.notice = Some(err.to_string());
            }
        }
        self.sync_handle();
    }

    /// Rebuild the image handle from the rendered buffer
    fn sync_handle(&mut self) {
        self.handle = self
            .viewer
            .picture()
            .map(|picture| ui::to_handle(&picture.rendered));
    }
}

fn handle_key(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        Key::Named(Named::ArrowRight) => Some(Message::Next),
        Key::Named(Named::Delete) => Some(Message::Delete),
        Key::Named(Named::Escape) => Some(Message::CancelCrop),
        _ => None,
    }
}

/// File dialog starting in the user's pictures folder
fn picker(title: &str) -> FileDialog {
    let dialog = FileDialog::new().set_title(title);
    match start_dir() {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}

fn start_dir() -> Option<PathBuf> {
    dirs::picture_dir().or_else(dirs::home_dir)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_args();

    iced::application(HueView::title, HueView::update, HueView::view)
        .subscription(HueView::subscription)
        .theme(HueView::theme)
        .window_size((1100.0, 720.0))
        .centered()
        .run_with(move || HueView::new(settings))
}
