use iced::Theme;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum::VariantArray;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, VariantArray)]
pub enum AppTheme {
    #[default]
    Dark,
    Light,
    Nord,
    Dracula,
    SolarizedDark,
    SolarizedLight,
}

impl AppTheme {
    #[must_use]
    pub fn to_iced(self) -> Theme {
        match self {
            Self::Dark => Theme::Dark,
            Self::Light => Theme::Light,
            Self::Nord => Theme::Nord,
            Self::Dracula => Theme::Dracula,
            Self::SolarizedDark => Theme::SolarizedDark,
            Self::SolarizedLight => Theme::SolarizedLight,
        }
    }
}

impl Display for AppTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.to_iced(), f)
    }
}
