use vec2d_math::Vector;
use crate::{backend::Backend, frame::Frame, style::{Color, LineStyle}};

/// A segment on the 2D plane, going from a start point to an end point.
///
/// The default color is blue, and the default line style is solid.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// The start point of the segment.
    pub start: Vector,

    /// The end point of the segment.
    pub end: Vector,

    /// The color of the segment.
    pub color: Color,

    /// The style of the line.
    pub line_style: LineStyle,
}

impl Segment {
    /// Creates a new segment between the given points.
    pub fn new(start: impl Into<Vector>, end: impl Into<Vector>) -> Segment {
        Segment {
            start: start.into(),
            end: end.into(),
            color: Color::Blue,
            line_style: LineStyle::Solid,
        }
    }

    /// Sets the color of the segment.
    ///
    /// Returns the segment itself to allow chaining.
    pub fn with_color(mut self, color: impl Into<Color>) -> Segment {
        self.color = color.into();
        self
    }

    /// Sets the line style of the segment.
    ///
    /// Returns the segment itself to allow chaining.
    pub fn with_line_style(mut self, line_style: LineStyle) -> Segment {
        self.line_style = line_style;
        self
    }

    /// Returns the vectors that define the shape: the start point, then the end point.
    pub fn vectors(&self) -> Vec<Vector> {
        vec![self.start, self.end]
    }

    pub(crate) fn render<B: Backend>(&self, _: &Frame, backend: &mut B) -> Result<(), B::Error> {
        backend.draw_line(self.start, self.end, self.color, self.line_style)
    }
}
