use crate::{config::Config, theme::AppTheme};
use iced::{
    widget::{button, column, container, horizontal_space, pick_list, row, text},
    Alignment::Center,
    Element,
};
use iced_aw::number_input;
use strum::VariantArray as _;

pub const MAX_DIVIDER_OFFSET: u32 = 4096;

#[derive(Clone, Copy, Debug)]
pub enum Message {
    ThemeSelected(AppTheme),
    DividerOffsetChanged(u32),
    Save,
    Cancel,
}

/// What the owner has to do after a preferences message.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    None,
    Save(Config),
    Close,
}

/// Edits a copy of the config until it is saved or thrown away.
#[derive(Clone, Debug)]
pub struct Preferences {
    draft: Config,
}

impl Preferences {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { draft: config }
    }

    #[must_use]
    pub const fn draft(&self) -> &Config {
        &self.draft
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ThemeSelected(theme) => self.draft.theme = theme,
            Message::DividerOffsetChanged(offset) => {
                self.draft.divider_offset = offset.min(MAX_DIVIDER_OFFSET);
            }
            Message::Save => return Action::Save(self.draft.clone()),
            Message::Cancel => return Action::Close,
        }

        Action::None
    }

    pub fn view(&self) -> Element<'_, Message> {
        let draft = self.draft();

        container(
            column![
                text("Preferences").size(20),
                row![
                    text("Theme"),
                    horizontal_space(),
                    pick_list(
                        AppTheme::VARIANTS,
                        Some(draft.theme),
                        Message::ThemeSelected
                    ),
                ]
                .align_y(Center),
                row![
                    text("Track panel width"),
                    horizontal_space(),
                    number_input(
                        draft.divider_offset,
                        0..=MAX_DIVIDER_OFFSET,
                        Message::DividerOffsetChanged
                    )
                    .width(80),
                ]
                .align_y(Center),
                row![
                    horizontal_space(),
                    button("Cancel")
                        .style(button::secondary)
                        .on_press(Message::Cancel),
                    button("Save").on_press(Message::Save),
                ]
                .spacing(10),
            ]
            .spacing(15),
        )
        .padding(20)
        .width(380)
        .style(container::rounded_box)
        .into()
    }
}
