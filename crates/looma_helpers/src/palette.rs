use bevy::prelude::*;
use strum::EnumIter;

/// The play color palette a moment can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum PlayColor {
    Green,
    Purple,
    Pink,
    Orange,
    Lavender,
    Blue,
    Fuchsia,
    Tan,
}

impl PlayColor {
    pub const fn color(self) -> Color {
        match self {
            Self::Green => Color::srgb(0.64, 0.83, 0.62),
            Self::Purple => Color::srgb(0.69, 0.58, 0.85),
            Self::Pink => Color::srgb(0.96, 0.66, 0.78),
            Self::Orange => Color::srgb(0.97, 0.68, 0.45),
            Self::Lavender => Color::srgb(0.80, 0.76, 0.93),
            Self::Blue => Color::srgb(0.55, 0.73, 0.93),
            Self::Fuchsia => Color::srgb(0.91, 0.45, 0.74),
            Self::Tan => Color::srgb(0.87, 0.77, 0.64),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::Lavender => "lavender",
            Self::Blue => "blue",
            Self::Fuchsia => "fuchsia",
            Self::Tan => "tan",
        }
    }
}
