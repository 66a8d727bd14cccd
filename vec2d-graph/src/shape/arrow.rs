use vec2d_math::{add, displacement, length, scale, Vector};
use crate::{backend::{ArrowHead, Backend}, frame::Frame, style::Color};

/// The length of an arrow head, as a fraction of the visible width of the drawing.
const HEAD_LENGTH_FRACTION: f64 = 1.0 / 20.0;

/// The ratio between the length and the width of an arrow head.
const HEAD_ASPECT: f64 = 1.5;

/// An arrow on the 2D plane, going from its tail to its tip.
///
/// The default tail is the origin of coordinates, and the default color is red.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    /// The point the arrow points to.
    pub tip: Vector,

    /// The point the arrow starts from.
    pub tail: Vector,

    /// The color of the shaft and head.
    pub color: Color,
}

impl Arrow {
    /// Creates a new arrow from the origin to the given tip.
    pub fn new(tip: impl Into<Vector>) -> Arrow {
        Arrow {
            tip: tip.into(),
            tail: Vector::ORIGIN,
            color: Color::Red,
        }
    }

    /// Sets the tail of the arrow.
    ///
    /// Returns the arrow itself to allow chaining.
    pub fn with_tail(mut self, tail: impl Into<Vector>) -> Arrow {
        self.tail = tail.into();
        self
    }

    /// Sets the color of the arrow.
    ///
    /// Returns the arrow itself to allow chaining.
    pub fn with_color(mut self, color: impl Into<Color>) -> Arrow {
        self.color = color.into();
        self
    }

    /// Returns the vectors that define the shape: the tip, then the tail.
    pub fn vectors(&self) -> Vec<Vector> {
        vec![self.tip, self.tail]
    }

    /// Returns the size of the head of arrows drawn in the given frame.
    pub fn head(frame: &Frame) -> ArrowHead {
        let length = frame.x_range() * HEAD_LENGTH_FRACTION;
        ArrowHead { length, width: length / HEAD_ASPECT }
    }

    /// Returns the end of the shaft, which is short of the tip by the length of the head so that
    /// the head ends exactly on the tip.
    ///
    /// Returns [`None`] if the arrow has zero length.
    pub fn shaft_end(&self, head: ArrowHead) -> Option<Vector> {
        let shaft = displacement(self.tip, self.tail);
        let arrow_length = length(shaft);
        if arrow_length == 0.0 {
            return None;
        }
        Some(add(self.tail, scale((arrow_length - head.length) / arrow_length, shaft)))
    }

    pub(crate) fn render<B: Backend>(&self, frame: &Frame, backend: &mut B) -> Result<(), B::Error> {
        let head = Arrow::head(frame);
        match self.shaft_end(head) {
            Some(shaft_end) => backend.draw_arrow(self.tail, shaft_end, head, self.color),
            None => {
                log::warn!("skipping zero-length arrow at {}", self.tail);
                Ok(())
            },
        }
    }
}
