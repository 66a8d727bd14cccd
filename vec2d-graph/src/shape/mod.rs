//! The shapes that can be drawn: [`Points`], [`Segment`], [`Polygon`], and [`Arrow`].
//!
//! Each shape stores the arguments it was built with, unchanged, in public fields. Shapes are
//! wrapped in a [`Shape`] to be handed to [`draw`](crate::draw); every shape converts into one
//! with [`Into`].

mod arrow;
mod points;
mod polygon;
mod segment;

pub use arrow::Arrow;
pub use points::Points;
pub use polygon::Polygon;
pub use segment::Segment;

use vec2d_math::Vector;
use crate::{backend::Backend, frame::Frame};

/// Any shape that can be drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Points(Points),
    Segment(Segment),
    Polygon(Polygon),
    Arrow(Arrow),
}

impl Shape {
    /// Returns the vectors that define the shape. These are used to decide which region of the
    /// plane must be visible.
    pub fn vectors(&self) -> Vec<Vector> {
        match self {
            Shape::Points(points) => points.vectors(),
            Shape::Segment(segment) => segment.vectors(),
            Shape::Polygon(polygon) => polygon.vectors(),
            Shape::Arrow(arrow) => arrow.vectors(),
        }
    }

    /// Draws the shape on the given backend.
    pub fn render<B: Backend>(&self, frame: &Frame, backend: &mut B) -> Result<(), B::Error> {
        match self {
            Shape::Points(points) => points.render(frame, backend),
            Shape::Segment(segment) => segment.render(frame, backend),
            Shape::Polygon(polygon) => polygon.render(frame, backend),
            Shape::Arrow(arrow) => arrow.render(frame, backend),
        }
    }
}

impl From<Points> for Shape {
    fn from(points: Points) -> Shape {
        Shape::Points(points)
    }
}

impl From<Segment> for Shape {
    fn from(segment: Segment) -> Shape {
        Shape::Segment(segment)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Shape {
        Shape::Polygon(polygon)
    }
}

impl From<Arrow> for Shape {
    fn from(arrow: Arrow) -> Shape {
        Shape::Arrow(arrow)
    }
}
