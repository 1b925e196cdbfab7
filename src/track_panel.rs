use iced::{
    widget::{button, column, container, text},
    Element, Length, Padding,
};

#[derive(Clone, Copy, Debug)]
pub enum Message {
    AddTrack,
}

/// The left side of the scrolling split: the track list and the "Add track" button.
pub fn view<'a>() -> Element<'a, Message> {
    // stays empty until tracks exist
    let track_list = column![];

    let add_track = button(text("Add track"))
        .width(Length::Fill)
        .on_press(Message::AddTrack);

    container(column![
        track_list,
        container(add_track).padding(Padding {
            top: 2.0,
            right: 10.0,
            bottom: 2.0,
            left: 10.0,
        }),
    ])
    .width(Length::Fill)
    .height(Length::Shrink)
    .padding([5, 0])
    .into()
}
