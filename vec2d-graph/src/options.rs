use std::path::PathBuf;
use vec2d_math::Vector;

/// Options to use when drawing shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOptions {
    /// Whether to mark the origin of coordinates with a black cross.
    ///
    /// The default value is `true`.
    pub origin: bool,

    /// Whether to draw the x- and y-axes.
    ///
    /// The default value is `true`.
    pub axes: bool,

    /// The spacing between grid ticks, given as a pair of `(x, y)` graph units, or [`None`] to
    /// hide the grid.
    ///
    /// When a grid is shown, the limits of the drawing are snapped to multiples of the spacing.
    ///
    /// The default value is `Some((1.0, 1.0))`, a tick per unit on both axes.
    pub grid: Option<Vector>,

    /// Whether to adjust the height of the figure so that a square of side one is displayed as a
    /// square instead of a rectangle.
    ///
    /// The default value is `true`.
    pub nice_aspect_ratio: bool,

    /// The width of the figure, in inches. The height is derived from it.
    ///
    /// The default value is `6.0`.
    pub width: f64,

    /// Path of the file to save the drawing to, if any.
    ///
    /// The default value is [`None`].
    pub save_as: Option<PathBuf>,
}

/// The default options for a drawing. Returns a [`DrawOptions`] with the following values:
///
/// - [`origin`](DrawOptions::origin): `true`
/// - [`axes`](DrawOptions::axes): `true`
/// - [`grid`](DrawOptions::grid): `Some((1.0, 1.0))`
/// - [`nice_aspect_ratio`](DrawOptions::nice_aspect_ratio): `true`
/// - [`width`](DrawOptions::width): `6.0`
/// - [`save_as`](DrawOptions::save_as): `None`
impl Default for DrawOptions {
    fn default() -> DrawOptions {
        DrawOptions {
            origin: true,
            axes: true,
            grid: Some(Vector(1.0, 1.0)),
            nice_aspect_ratio: true,
            width: 6.0,
            save_as: None,
        }
    }
}

impl DrawOptions {
    /// Set whether to mark the origin. Returns an updated [`DrawOptions`] for chaining.
    pub fn origin(mut self, origin: bool) -> Self {
        self.origin = origin;
        self
    }

    /// Set whether to draw the axes. Returns an updated [`DrawOptions`] for chaining.
    pub fn axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    /// Set the grid spacing. Returns an updated [`DrawOptions`] for chaining.
    pub fn grid(mut self, x: f64, y: f64) -> Self {
        self.grid = Some(Vector(x, y));
        self
    }

    /// Hide the grid. Returns an updated [`DrawOptions`] for chaining.
    pub fn no_grid(mut self) -> Self {
        self.grid = None;
        self
    }

    /// Set whether to keep unit squares square. Returns an updated [`DrawOptions`] for chaining.
    pub fn nice_aspect_ratio(mut self, nice_aspect_ratio: bool) -> Self {
        self.nice_aspect_ratio = nice_aspect_ratio;
        self
    }

    /// Set the width of the figure, in inches. Returns an updated [`DrawOptions`] for chaining.
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the path of the file to save the drawing to. Returns an updated [`DrawOptions`] for
    /// chaining.
    pub fn save_as(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_as = Some(path.into());
        self
    }
}
