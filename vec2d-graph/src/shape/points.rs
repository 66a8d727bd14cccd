use vec2d_math::Vector;
use crate::{backend::Backend, frame::Frame, style::{Color, Marker}};

/// A collection of points on the 2D plane, displayed as dots.
///
/// The default color is black.
#[derive(Clone, Debug, PartialEq)]
pub struct Points {
    /// The coordinates of the points to draw.
    pub vectors: Vec<Vector>,

    /// The color of the dots.
    pub color: Color,
}

impl Points {
    /// Creates a new collection of points.
    pub fn new<V: Into<Vector>>(vectors: impl IntoIterator<Item = V>) -> Points {
        Points {
            vectors: vectors.into_iter().map(Into::into).collect(),
            color: Color::Black,
        }
    }

    /// Sets the color of the points.
    ///
    /// Returns the points themselves to allow chaining.
    pub fn with_color(mut self, color: impl Into<Color>) -> Points {
        self.color = color.into();
        self
    }

    /// Returns the vectors that define the shape.
    pub fn vectors(&self) -> Vec<Vector> {
        self.vectors.clone()
    }

    pub(crate) fn render<B: Backend>(&self, _: &Frame, backend: &mut B) -> Result<(), B::Error> {
        backend.draw_points(&self.vectors, self.color, Marker::Dot)
    }
}
