use iced::{
    widget::{column, container, radio, row, slider, text, Text},
    Alignment::Center,
    Element, Length,
};
use iced_fonts::{
    bootstrap::{icon_to_string, Bootstrap},
    BOOTSTRAP_FONT,
};
use serde::{Deserialize, Serialize};

pub const MAX_ZOOM: u8 = 100;

/// What the timeline ruler counts in.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum RulerMode {
    #[default]
    Time,
    Measures,
}

#[derive(Clone, Copy, Debug)]
pub enum Message {
    ZoomChanged(u8),
    RulerChanged(RulerMode),
}

#[derive(Clone, Copy, Debug)]
pub struct ZoomControls {
    zoom: u8,
    ruler: RulerMode,
}

impl ZoomControls {
    #[must_use]
    pub fn new(zoom: u8, ruler: RulerMode) -> Self {
        Self {
            zoom: zoom.min(MAX_ZOOM),
            ruler,
        }
    }

    #[must_use]
    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    #[must_use]
    pub const fn ruler(&self) -> RulerMode {
        self.ruler
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ZoomChanged(zoom) => self.zoom = zoom.min(MAX_ZOOM),
            Message::RulerChanged(ruler) => self.ruler = ruler,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controls = row![
            Text::new(icon_to_string(Bootstrap::ZoomIn)).font(BOOTSTRAP_FONT),
            text("Zoom"),
            slider(0..=MAX_ZOOM, self.zoom, Message::ZoomChanged).step(1),
            column![
                radio("Time", RulerMode::Time, Some(self.ruler), Message::RulerChanged),
                radio(
                    "Measures",
                    RulerMode::Measures,
                    Some(self.ruler),
                    Message::RulerChanged
                ),
            ]
            .spacing(4),
        ]
        .spacing(6)
        .padding([0, 6])
        .align_y(Center);

        container(controls)
            .width(Length::Fill)
            .height(60)
            .center_y(60)
            .style(container::bordered_box)
            .into()
    }
}
