use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Program, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::state::data::CropRegion;
use crate::Message;

/// Crop selection overlay drawn on top of the image
///
/// The image widget underneath uses `ContentFit::Contain`, so the overlay
/// recomputes the same fitted rectangle to map drags to image pixels.
pub struct CropOverlay {
    /// Size of the image being displayed, in pixels
    pub image_size: (u32, u32),
}

impl Program<Message> for CropOverlay {
    type State = DragState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let fitted = fit_rect(self.image_size, bounds.size());

        // Thin outline of the whole image, like a rubber band
        frame.stroke(
            &Path::rectangle(fitted.position(), fitted.size()),
            Stroke::default()
                .with_color(Color::from_rgba(0.0, 0.0, 0.0, 0.8))
                .with_width(3.0),
        );

        if let Some(selection) = state.selection() {
            let selection = clip(selection, fitted);
            frame.fill_rectangle(
                selection.position(),
                selection.size(),
                Color::from_rgba(1.0, 1.0, 1.0, 0.15),
            );
            frame.stroke(
                &Path::rectangle(selection.position(), selection.size()),
                Stroke::default().with_color(Color::WHITE).with_width(2.0),
            );
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse button press - start a new selection
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    state.is_dragging = true;
                    state.anchor = Some(pos);
                    state.current = Some(pos);
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Mouse move - grow the selection while dragging
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging {
                    if let Some(pos) = cursor.position_from(bounds.position()) {
                        state.current = Some(pos);
                        return (canvas::event::Status::Captured, None);
                    }
                }
            }

            // Mouse button release - report the selection in image pixels
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if !state.is_dragging {
                    return (canvas::event::Status::Ignored, None);
                }
                state.is_dragging = false;

                if let (Some(anchor), Some(current)) = (state.anchor, state.current) {
                    let fitted = fit_rect(self.image_size, bounds.size());
                    let region = CropRegion::from_corners(
                        to_image_point(anchor, fitted, self.image_size),
                        to_image_point(current, fitted, self.image_size),
                    );
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::CropSelected(region)),
                    );
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }
}

/// State for drag interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,
    /// Where the drag started (canvas coordinates)
    pub anchor: Option<Point>,
    /// Latest cursor position during the drag
    pub current: Option<Point>,
}

impl DragState {
    /// Rectangle spanned by the drag so far
    pub fn selection(&self) -> Option<Rectangle> {
        let (a, b) = (self.anchor?, self.current?);
        Some(Rectangle {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        })
    }
}

/// Largest rectangle with the image's aspect ratio that fits in `bounds`,
/// centered (the layout `ContentFit::Contain` produces)
pub fn fit_rect((width, height): (u32, u32), bounds: Size) -> Rectangle {
    if width == 0 || height == 0 {
        return Rectangle::new(Point::ORIGIN, Size::ZERO);
    }

    let scale = (bounds.width / width as f32).min(bounds.height / height as f32);
    let size = Size::new(width as f32 * scale, height as f32 * scale);

    Rectangle::new(
        Point::new(
            (bounds.width - size.width) / 2.0,
            (bounds.height - size.height) / 2.0,
        ),
        size,
    )
}

/// Map a canvas point to image pixel coordinates, clamped to the image
pub fn to_image_point(point: Point, fitted: Rectangle, (width, height): (u32, u32)) -> (u32, u32) {
    if fitted.width <= 0.0 || fitted.height <= 0.0 {
        return (0, 0);
    }

    let scale = fitted.width / width as f32;
    let x = ((point.x - fitted.x) / scale).round().clamp(0.0, width as f32);
    let y = ((point.y - fitted.y) / scale).round().clamp(0.0, height as f32);
    (x as u32, y as u32)
}

fn clip(rect: Rectangle, to: Rectangle) -> Rectangle {
    rect.intersection(&to)
        .unwrap_or(Rectangle::new(to.position(), Size::ZERO))
}
