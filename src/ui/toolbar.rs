use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Top bar: file actions, crop and exit
///
/// `can_crop` is true when a decoded image is on screen. While cropping the
/// crop entry is replaced by "Apply Crop" / "Cancel".
pub fn top_bar<'a>(can_crop: bool, cropping: bool, has_selection: bool) -> Element<'a, Message> {
    let mut bar = row![
        menu_button("Open Directory", Some(Message::OpenDirectory)),
        menu_button("Open Image", Some(Message::OpenImage)),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    bar = if cropping {
        bar.push(menu_button("Apply Crop", has_selection.then_some(Message::ApplyCrop)))
            .push(menu_button("Cancel", Some(Message::CancelCrop)))
    } else {
        bar.push(menu_button("Crop", can_crop.then_some(Message::StartCrop)))
    };

    bar = bar
        .push(horizontal_space())
        .push(menu_button("Exit", Some(Message::Exit)));

    container(bar).width(Length::Fill).padding(6).into()
}

/// Bottom bar: transient notice on the left, image readout on the right
pub fn status_bar<'a>(notice: Option<&'a str>, readout: String) -> Element<'a, Message> {
    container(
        row![
            text(notice.unwrap_or_default()).size(13),
            horizontal_space(),
            text(readout).size(13),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([4, 10])
    .into()
}

fn menu_button(label: &str, on_press: Option<Message>) -> Element<'_, Message> {
    button(text(label).size(14))
        .on_press_maybe(on_press)
        .padding([6, 12])
        .into()
}
