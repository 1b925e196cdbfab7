use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum::VariantArray;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, VariantArray)]
pub enum TimeSignature {
    #[default]
    FourFour,
    SixEight,
    ThreeFour,
}

impl TimeSignature {
    #[must_use]
    pub const fn numerator(self) -> u8 {
        match self {
            Self::FourFour => 4,
            Self::SixEight => 6,
            Self::ThreeFour => 3,
        }
    }

    #[must_use]
    pub const fn denominator(self) -> u8 {
        match self {
            Self::FourFour | Self::ThreeFour => 4,
            Self::SixEight => 8,
        }
    }
}

impl Display for TimeSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}
