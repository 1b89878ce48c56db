//! Wall glyph sets selected by intensity

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::WallCharError;

/// Glyphs drawing the walls of one style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WallGlyphs {
    /// Wall above or below a cell; spans the cell's three columns
    pub horizontal: &'static str,
    /// Wall left or right of a cell, also the initial corner glyph
    pub vertical: &'static str,
    /// Corner between two horizontal walls once the vertical walls around it are open
    pub corner: &'static str,
}

/// Wall style, keyed by the intensity value callers pass in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(i32)]
pub enum WallStyle {
    #[default]
    Thin = 1,
    Double = 2,
    Box = 3,
}

impl WallStyle {
    pub const fn intensity(self) -> i32 {
        self as i32
    }

    pub const fn glyphs(self) -> WallGlyphs {
        match self {
            WallStyle::Thin => WallGlyphs {
                horizontal: "---",
                vertical: "|",
                corner: "-",
            },
            WallStyle::Double => WallGlyphs {
                horizontal: "===",
                vertical: "|",
                corner: "=",
            },
            WallStyle::Box => WallGlyphs {
                horizontal: "───",
                vertical: "│",
                corner: "─",
            },
        }
    }
}

impl TryFrom<i32> for WallStyle {
    type Error = WallCharError;

    fn try_from(intensity: i32) -> Result<Self, Self::Error> {
        match intensity {
            1 => Ok(WallStyle::Thin),
            2 => Ok(WallStyle::Double),
            3 => Ok(WallStyle::Box),
            other => Err(WallCharError(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_intensity_round_trip() {
        for style in WallStyle::iter() {
            assert_eq!(WallStyle::try_from(style.intensity()), Ok(style));
        }
    }

    #[test]
    fn test_unknown_intensity() {
        let err = WallStyle::try_from(-1).unwrap_err();
        assert_eq!(err, WallCharError(-1));
        assert!(err.to_string().contains("Invalid value of intensity found:"));
        assert!(WallStyle::try_from(0).is_err());
        assert!(WallStyle::try_from(4).is_err());
    }

    #[test]
    fn test_wall_glyphs_have_no_spaces() {
        // Openings are detected by looking for a space.
        for style in WallStyle::iter() {
            let glyphs = style.glyphs();
            assert!(!glyphs.horizontal.contains(' '));
            assert!(!glyphs.vertical.contains(' '));
            assert!(!glyphs.corner.contains(' '));
            assert_eq!(glyphs.horizontal.chars().count(), 3);
            assert_eq!(glyphs.vertical.chars().count(), 1);
            assert_eq!(glyphs.corner.chars().count(), 1);
        }
    }
}
