//! Rendering backends.
//!
//! [`draw`](crate::draw) never renders anything itself. It computes a [`Frame`] and translates
//! every shape into calls on a [`Backend`], which does the actual work. Two backends are
//! provided:
//!
//! - [`CairoBackend`] renders to an image with [`cairo`] and can save it as a PNG file.
//! - [`Recorder`] stores every call as a [`Command`], which is useful for testing and for
//!   replaying a drawing elsewhere.
//!
//! All coordinates handed to a backend are in **graph** units; converting them to pixels (or
//! whatever the target uses) is up to the backend.

pub mod surface;
pub mod record;

use std::path::Path;
use vec2d_math::Vector;
use crate::{frame::Frame, style::{Color, LineStyle, Marker}};

pub use surface::{CairoBackend, CairoBackendError, CanvasPoint, Viewport};
pub use record::{Command, Recorder};

/// The size of an arrow head, in graph units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowHead {
    /// The distance from the base of the head to its tip, along the arrow.
    pub length: f64,

    /// The full width of the base of the head, across the arrow.
    pub width: f64,
}

/// A target that shapes can be drawn on.
///
/// For a single drawing, [`Backend::begin`] is called first, then any number of the drawing
/// methods, then optionally [`Backend::save`], and finally [`Backend::render`] exactly once.
pub trait Backend {
    /// The error returned when a drawing operation fails.
    type Error: std::error::Error + 'static;

    /// Starts a new drawing covering the given frame.
    fn begin(&mut self, frame: &Frame) -> Result<(), Self::Error>;

    /// Draws vertical grid lines at the given x-values and horizontal grid lines at the given
    /// y-values.
    fn draw_grid(&mut self, x_ticks: &[f64], y_ticks: &[f64]) -> Result<(), Self::Error>;

    /// Draws the x- and y-axes.
    fn draw_axes(&mut self) -> Result<(), Self::Error>;

    /// Stamps a marker at each of the given points.
    fn draw_points(&mut self, points: &[Vector], color: Color, marker: Marker) -> Result<(), Self::Error>;

    /// Draws a straight line between two points.
    fn draw_line(&mut self, start: Vector, end: Vector, color: Color, style: LineStyle) -> Result<(), Self::Error>;

    /// Fills the polygon with the given vertices, blending the color with the given opacity.
    fn draw_polygon(&mut self, vertices: &[Vector], color: Color, alpha: f64) -> Result<(), Self::Error>;

    /// Draws an arrow shaft from `tail` to `shaft_end`, and a head whose base is centered at
    /// `shaft_end` and which extends `head.length` further along the shaft.
    fn draw_arrow(&mut self, tail: Vector, shaft_end: Vector, head: ArrowHead, color: Color) -> Result<(), Self::Error>;

    /// Saves the drawing to the given file.
    fn save(&mut self, path: &Path) -> Result<(), Self::Error>;

    /// Finishes the drawing.
    fn render(&mut self) -> Result<(), Self::Error>;
}
