use iced::widget::{button, checkbox, column, container, horizontal_rule, row, slider, text};
use iced::{Alignment, Element, Length};

use crate::state::filter::{CHANNEL_MAX, HUE_MAX};
use crate::state::viewer::Viewer;
use crate::Message;

/// Width of the side panel in logical pixels
const PANEL_WIDTH: f32 = 240.0;

/// Side panel: delete/previous/next, the three HSV sliders, persist toggle
pub fn side_panel(viewer: &Viewer) -> Element<'_, Message> {
    let nav = viewer.navigation();
    let filter = viewer.filter();

    // Buttons are disabled (no on_press) at the list boundaries
    let buttons = row![
        button(text("Delete").size(14))
            .on_press_maybe(nav.can_delete.then_some(Message::Delete))
            .padding(8),
        button(text("◀").size(14))
            .on_press_maybe(nav.can_previous.then_some(Message::Previous))
            .padding(8),
        button(text("▶").size(14))
            .on_press_maybe(nav.can_next.then_some(Message::Next))
            .padding(8),
    ]
    .spacing(8);

    let sliders = column![
        text("Hue Saturation Value").size(16),
        slider_row(
            format!("H: {}", filter.hue()),
            slider(0..=HUE_MAX, filter.hue(), Message::HueChanged),
        ),
        slider_row(
            format!("S: {}", filter.saturation()),
            slider(0..=CHANNEL_MAX, filter.saturation(), Message::SaturationChanged),
        ),
        slider_row(
            format!("V: {}", filter.value()),
            slider(0..=CHANNEL_MAX, filter.value(), Message::ValueChanged),
        ),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    let persist = checkbox("Persist Filter", filter.persist()).on_toggle(Message::PersistToggled);

    container(
        column![buttons, horizontal_rule(1), sliders, horizontal_rule(1), persist]
            .spacing(16)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(PANEL_WIDTH))
    .height(Length::Fill)
    .padding(16)
    .into()
}

/// Numeric readout on the left, slider filling the rest
fn slider_row<'a>(
    label: String,
    slider: iced::widget::Slider<'a, u8, Message>,
) -> Element<'a, Message> {
    row![text(label).size(14).width(Length::Fixed(56.0)), slider]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}
