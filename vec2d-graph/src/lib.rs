//! Draw simple figures on the 2D plane: points, segments, polygons, and arrows.
//!
//! Build the shapes to draw, pick a [`Backend`] to draw them on, and call [`draw()`]. The visible
//! region, grid, axes, and figure size are worked out from the shapes and the [`DrawOptions`], so
//! the common case needs no configuration at all.
//!
//! This crate uses the [`cairo`] crate through [`CairoBackend`] to render drawings to images.
//! Any other target can be supported by implementing [`Backend`]; [`Recorder`] is a backend that
//! simply records what it was asked to draw.
//!
//! # Example
//!
//! The following example draws a filled triangle, an arrow to one of its vertices, and the
//! vertices themselves, then writes the result to a PNG file.
//!
//! ```no_run
//! use vec2d_graph::{draw, Arrow, CairoBackend, Color, DrawOptions, Points, Polygon, Shape};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let triangle = [(1, 1), (5, 1), (3, 4)];
//! let shapes: [Shape; 3] = [
//!     Polygon::new(triangle).with_fill(Color::Green).into(),
//!     Arrow::new((3, 4)).with_color(Color::Purple).into(),
//!     Points::new(triangle).into(),
//! ];
//!
//! let mut backend = CairoBackend::new();
//! draw(&shapes, &DrawOptions::default().save_as("triangle.png"), &mut backend)?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
mod draw;
pub mod frame;
pub mod options;
pub mod shape;
pub mod style;
mod text_align;

pub use backend::{ArrowHead, Backend, CairoBackend, CairoBackendError, Command, Recorder};
pub use draw::{draw, DrawError};
pub use frame::{Frame, FrameError, MAX_TICKS};
pub use options::DrawOptions;
pub use shape::{Arrow, Points, Polygon, Segment, Shape};
pub use style::{Color, LineStyle, Marker};
pub use vec2d_math::Vector;
