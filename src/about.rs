use iced::{
    widget::{button, column, container, text, Text},
    Alignment::Center,
    Element,
};
use iced_fonts::{
    bootstrap::{icon_to_string, Bootstrap},
    BOOTSTRAP_FONT,
};

pub const PROGRAM_NAME: &str = "MusicBench";
pub const VERSION: &str = "PRE-ALPHA UI TEST";
pub const COPYRIGHT: &str = "\u{a9}2023 Austin Pringle";
pub const COMMENTS: &str = "An easy-to-use, open source, cross-platform DAW, designed\nto meet the GNOME Human Interface Guidelines";
pub const LICENSE: &str = "GNU General Public License, version 3";
pub const AUTHORS: &[&str] = &["Austin Pringle"];
pub const LOGO: Bootstrap = Bootstrap::MusicNoteBeamed;

pub fn view<'a, Message>(on_close: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let authors = AUTHORS
        .iter()
        .fold(column![text("Created by").size(13)], |col, author| {
            col.push(text(*author))
        })
        .align_x(Center);

    container(
        column![
            Text::new(icon_to_string(LOGO))
                .font(BOOTSTRAP_FONT)
                .size(48),
            text(PROGRAM_NAME).size(24),
            text(VERSION).size(13),
            text(COMMENTS).center(),
            authors,
            text(COPYRIGHT).size(13),
            text(LICENSE).size(13),
            button("Close").on_press(on_close),
        ]
        .spacing(12)
        .align_x(Center),
    )
    .padding(20)
    .width(420)
    .style(container::rounded_box)
    .into()
}
