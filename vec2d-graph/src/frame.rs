use thiserror::Error;
use vec2d_math::Vector;
use crate::options::DrawOptions;

/// The fraction of the data range added on each side of the drawing as padding.
const PADDING: f64 = 0.05;

/// The height-to-width ratio of the figure when [`DrawOptions::nice_aspect_ratio`] is disabled.
const DEFAULT_ASPECT: f64 = 0.75;

/// The most grid ticks a frame may have along one axis.
pub const MAX_TICKS: usize = 1000;

/// Errors produced when computing a [`Frame`].
#[derive(Debug, Error)]
pub enum FrameError {
    /// A shape has a coordinate that is infinite or NaN.
    #[error("cannot draw the non-finite vector {0}")]
    NonFiniteVector(Vector),

    /// The visible region is too large to be represented.
    #[error("the visible region x {x_limits:?}, y {y_limits:?} is out of range")]
    OutOfRange { x_limits: (f64, f64), y_limits: (f64, f64) },

    /// The grid would need more than [`MAX_TICKS`] ticks along some axis.
    #[error("the grid needs {x} x-ticks and {y} y-ticks, more than the limit of {}", MAX_TICKS)]
    TooManyTicks { x: f64, y: f64 },
}

/// The view computed for a single call to [`draw`](crate::draw): which part of the plane is
/// visible, where the grid ticks go, and how large the figure is.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The `(min, max)` visible x-values, in graph units.
    pub x_limits: (f64, f64),

    /// The `(min, max)` visible y-values, in graph units.
    pub y_limits: (f64, f64),

    /// The x-values at which vertical grid lines are drawn. Empty if the grid is hidden.
    pub x_ticks: Vec<f64>,

    /// The y-values at which horizontal grid lines are drawn. Empty if the grid is hidden.
    pub y_ticks: Vec<f64>,

    /// The `(width, height)` of the figure, in inches.
    pub size: (f64, f64),
}

/// Returns `start, start + step, ...` for every value strictly below `stop`.
///
/// The limits handed to this function are multiples of `step`, so a small tolerance keeps
/// floating point noise from adding a tick at `stop` itself.
fn ticks(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let count = tick_count(start, stop, step) as usize;
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// Returns how many values [`ticks`] would produce.
fn tick_count(start: f64, stop: f64, step: f64) -> f64 {
    ((stop - start) / step - 1e-9).ceil().max(0.0)
}

/// Computes the limits of one axis given the data bounds.
fn limits(min: f64, max: f64, grid: Option<f64>) -> (f64, f64) {
    let range = max - min;
    match grid {
        Some(step) => {
            let padding = (PADDING * range).ceil().max(step);
            (
                ((min - padding) / step).floor() * step,
                ((max + padding) / step).ceil() * step,
            )
        },
        None => {
            // keep the view from collapsing when every vector lies on the axis
            let padding = if range > 0.0 { PADDING * range } else { 1.0 };
            (min - padding, max + padding)
        },
    }
}

impl Frame {
    /// Computes the frame that shows all the given vectors and the origin of coordinates.
    ///
    /// The options are assumed to be valid: grid spacing and width finite and positive.
    ///
    /// Fails if a vector is not finite, if the visible region overflows, or if the grid would
    /// need more than [`MAX_TICKS`] ticks along an axis. Nothing is allocated for the ticks
    /// before the last check passes.
    pub fn new(
        vectors: impl IntoIterator<Item = Vector>,
        options: &DrawOptions,
    ) -> Result<Frame, FrameError> {
        let (mut min, mut max) = (Vector::ORIGIN, Vector::ORIGIN);
        for v in vectors {
            if !v.0.is_finite() || !v.1.is_finite() {
                return Err(FrameError::NonFiniteVector(v));
            }
            min = Vector(min.0.min(v.0), min.1.min(v.1));
            max = Vector(max.0.max(v.0), max.1.max(v.1));
        }

        let x_limits = limits(min.0, max.0, options.grid.map(|g| g.0));
        let y_limits = limits(min.1, max.1, options.grid.map(|g| g.1));
        let finite = |(lo, hi): (f64, f64)| lo.is_finite() && hi.is_finite() && (hi - lo).is_finite();
        if !finite(x_limits) || !finite(y_limits) {
            return Err(FrameError::OutOfRange { x_limits, y_limits });
        }

        let (x_ticks, y_ticks) = match options.grid {
            Some(Vector(gx, gy)) => {
                let x = tick_count(x_limits.0, x_limits.1, gx);
                let y = tick_count(y_limits.0, y_limits.1, gy);
                if x > MAX_TICKS as f64 || y > MAX_TICKS as f64 {
                    return Err(FrameError::TooManyTicks { x, y });
                }
                (
                    ticks(x_limits.0, x_limits.1, gx),
                    ticks(y_limits.0, y_limits.1, gy),
                )
            },
            None => (Vec::new(), Vec::new()),
        };

        let mut frame = Frame {
            x_limits,
            y_limits,
            x_ticks,
            y_ticks,
            size: (options.width, options.width * DEFAULT_ASPECT),
        };
        if options.nice_aspect_ratio {
            frame.size.1 = options.width * frame.y_range() / frame.x_range();
        }
        Ok(frame)
    }

    /// Returns the width of the visible region, in graph units.
    pub fn x_range(&self) -> f64 {
        self.x_limits.1 - self.x_limits.0
    }

    /// Returns the height of the visible region, in graph units.
    pub fn y_range(&self) -> f64 {
        self.y_limits.1 - self.y_limits.0
    }
}
