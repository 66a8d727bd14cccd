//! Presentation constants: colors, line styles, and point markers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color to draw a shape with.
///
/// The named colors follow the classic plotting palette, so drawings look the same as the ones
/// produced by most plotting libraries. Any other color can be given with [`Color::Rgb`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Blue,
    Black,
    Red,
    Green,
    Purple,
    Brown,
    Pink,
    Orange,
    Gray,

    /// An arbitrary color, given as an RGB tuple with each value in the range `0.0` to `1.0`.
    Rgb(f64, f64, f64),
}

/// Converts a `0xRRGGBB` value to an RGB tuple in the range `0.0` to `1.0`.
fn hex(rgb: u32) -> (f64, f64, f64) {
    let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f64 / 255.0;
    (channel(16), channel(8), channel(0))
}

impl Color {
    /// Returns the color as an RGB tuple with each value in the range `0.0` to `1.0`.
    pub fn rgb(self) -> (f64, f64, f64) {
        match self {
            Color::Blue => hex(0x1f77b4),
            Color::Black => hex(0x000000),
            Color::Red => hex(0xd62728),
            Color::Green => hex(0x2ca02c),
            Color::Purple => hex(0x9467bd),
            Color::Brown => hex(0x8c564b),
            Color::Pink => hex(0xe377c2),
            Color::Orange => hex(0xff7f0e),
            Color::Gray => hex(0x808080),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl From<(f64, f64, f64)> for Color {
    fn from((r, g, b): (f64, f64, f64)) -> Color {
        Color::Rgb(r, g, b)
    }
}

/// The style of the lines used to draw segments and polygon outlines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// Returns the on / off dash pattern of the style, for a line of width `1.0`. Backends should
    /// multiply the pattern by the actual line width.
    ///
    /// An empty pattern means a continuous line.
    pub fn dash_pattern(self) -> &'static [f64] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dashed => &[3.7, 1.6],
            LineStyle::Dotted => &[1.0, 1.65],
            LineStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        }
    }
}

/// How individual points are stamped on the drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Marker {
    /// A filled circle.
    #[default]
    Dot,

    /// An `x`-shaped cross.
    Cross,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(Color::Black.rgb(), (0.0, 0.0, 0.0));
        assert_eq!(Color::Red.rgb(), (214.0 / 255.0, 39.0 / 255.0, 40.0 / 255.0));
        assert_eq!(Color::Gray.rgb(), (128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0));
    }

    #[test]
    fn custom_colors() {
        assert_eq!(Color::from((0.1, 0.2, 0.3)), Color::Rgb(0.1, 0.2, 0.3));
        assert_eq!(Color::Rgb(0.1, 0.2, 0.3).rgb(), (0.1, 0.2, 0.3));
    }

    #[test]
    fn dash_patterns() {
        assert!(LineStyle::Solid.dash_pattern().is_empty());
        assert_eq!(LineStyle::Dashed.dash_pattern().len(), 2);
        assert_eq!(LineStyle::DashDot.dash_pattern().len(), 4);
    }
}
