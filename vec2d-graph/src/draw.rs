use thiserror::Error;
use vec2d_math::Vector;
use crate::{
    backend::Backend,
    frame::{Frame, FrameError},
    options::DrawOptions,
    shape::Shape,
    style::{Color, Marker},
};

/// Errors produced by [`draw`].
#[derive(Debug, Error)]
pub enum DrawError<E> {
    /// The grid spacing must be finite and positive on both axes.
    #[error("invalid grid spacing ({x}, {y}): both values must be finite and positive")]
    InvalidGrid { x: f64, y: f64 },

    /// The figure width must be finite and positive.
    #[error("invalid figure width {0}: must be finite and positive")]
    InvalidWidth(f64),

    /// No frame can show the given shapes.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// The backend failed to draw.
    #[error("backend error: {0}")]
    Backend(#[source] E),
}

/// Checks that the options describe a drawable frame.
fn validate<E>(options: &DrawOptions) -> Result<(), DrawError<E>> {
    let valid = |n: f64| n.is_finite() && n > 0.0;

    if let Some(Vector(x, y)) = options.grid {
        if !valid(x) || !valid(y) {
            return Err(DrawError::InvalidGrid { x, y });
        }
    }

    if !valid(options.width) {
        return Err(DrawError::InvalidWidth(options.width));
    }

    Ok(())
}

/// Draws the given shapes on the backend.
///
/// The visible region is chosen so that every shape and the origin of coordinates fit, as
/// described by [`Frame::new`]. The backend then receives, in order: the frame, the grid, the
/// axes, the origin marker (each only if enabled in the options), every shape in the order given,
/// a request to save the drawing (if [`DrawOptions::save_as`] is set), and exactly one call to
/// [`Backend::render`].
///
/// Any number of shapes can be drawn, including none. Returns the frame that was used. Nothing
/// reaches the backend if the options are invalid or no frame can be computed.
pub fn draw<B: Backend>(
    shapes: &[Shape],
    options: &DrawOptions,
    backend: &mut B,
) -> Result<Frame, DrawError<B::Error>> {
    validate::<B::Error>(options)?;
    log::debug!("vec2d-graph v{}: drawing {} shapes", env!("CARGO_PKG_VERSION"), shapes.len());

    let frame = Frame::new(shapes.iter().flat_map(Shape::vectors), options)?;
    log::debug!("frame: x {:?}, y {:?}, size {:?}", frame.x_limits, frame.y_limits, frame.size);

    render(shapes, options, &frame, backend).map_err(DrawError::Backend)?;
    Ok(frame)
}

/// Issues the backend calls for a drawing.
fn render<B: Backend>(
    shapes: &[Shape],
    options: &DrawOptions,
    frame: &Frame,
    backend: &mut B,
) -> Result<(), B::Error> {
    backend.begin(frame)?;

    if options.grid.is_some() {
        backend.draw_grid(&frame.x_ticks, &frame.y_ticks)?;
    }

    if options.axes {
        backend.draw_axes()?;
    }

    if options.origin {
        backend.draw_points(&[Vector::ORIGIN], Color::Black, Marker::Cross)?;
    }

    for shape in shapes {
        shape.render(frame, backend)?;
    }

    if let Some(path) = &options.save_as {
        backend.save(path)?;
    }

    backend.render()
}
