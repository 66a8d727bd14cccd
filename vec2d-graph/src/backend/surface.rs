use cairo::{Context, FontSlant, FontWeight, Format, ImageSurface};
use std::{fs::File, path::Path};
use thiserror::Error;
use vec2d_math::{displacement, length, Vector};
use crate::{
    frame::Frame,
    style::{Color, LineStyle, Marker},
    text_align::{format_value, ShowTextAlign},
};
use super::{ArrowHead, Backend};

/// Number of typographic points per inch. Line widths and marker sizes are given in points so
/// they scale with the resolution.
const POINTS_PER_INCH: f64 = 72.0;

/// A pair of `(x, y)` values in **canvas** units (pixels, origin at the top left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasPoint<T>(pub T, pub T);

impl<T> From<(T, T)> for CanvasPoint<T> {
    fn from((x, y): (T, T)) -> CanvasPoint<T> {
        CanvasPoint(x, y)
    }
}

/// Maps the visible region of the plane onto the plot area of a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// The width and height of the canvas, in pixels.
    pub canvas_size: CanvasPoint<i32>,

    /// The blank space around the plot area, in pixels. Tick labels are drawn there.
    pub margin: f64,

    /// The `(min, max)` visible x-values, in graph units.
    pub x_limits: (f64, f64),

    /// The `(min, max)` visible y-values, in graph units.
    pub y_limits: (f64, f64),
}

impl Viewport {
    /// Returns the width and height of the plot area, in pixels.
    fn plot_size(&self) -> (f64, f64) {
        (
            self.canvas_size.0 as f64 - 2.0 * self.margin,
            self.canvas_size.1 as f64 - 2.0 * self.margin,
        )
    }

    /// Converts an x-value in **graph** space to an x-value in **canvas** space.
    pub(crate) fn x_to_canvas(&self, x: f64) -> f64 {
        // normalize x-value to [0.0, 1.0], where 0.0 indicates left-edge of visible graph, 1.0
        // indicates right-edge of visible graph
        let normalized = (x - self.x_limits.0) / (self.x_limits.1 - self.x_limits.0);
        self.margin + normalized * self.plot_size().0
    }

    /// Converts a y-value in **graph** space to a y-value in **canvas** space.
    pub(crate) fn y_to_canvas(&self, y: f64) -> f64 {
        // flipped, since the y-axis points down in canvas space
        let normalized = 1.0 - (y - self.y_limits.0) / (self.y_limits.1 - self.y_limits.0);
        self.margin + normalized * self.plot_size().1
    }

    /// Converts a point in **graph** space to **canvas** space.
    pub fn to_canvas(&self, point: Vector) -> CanvasPoint<f64> {
        CanvasPoint(self.x_to_canvas(point.0), self.y_to_canvas(point.1))
    }

    /// Converts a point in **canvas** space to **graph** space.
    pub fn to_graph(&self, point: CanvasPoint<f64>) -> Vector {
        let (width, height) = self.plot_size();
        let x = (point.0 - self.margin) / width;
        let y = 1.0 - (point.1 - self.margin) / height;
        Vector(
            self.x_limits.0 + x * (self.x_limits.1 - self.x_limits.0),
            self.y_limits.0 + y * (self.y_limits.1 - self.y_limits.0),
        )
    }
}

/// Errors produced by the [`CairoBackend`].
#[derive(Debug, Error)]
pub enum CairoBackendError {
    /// A drawing method was called before [`Backend::begin`].
    #[error("drawing has not been started")]
    NotStarted,

    #[error(transparent)]
    Cairo(#[from] cairo::Error),

    #[error("failed to write PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The surface being drawn on and how graph space maps onto it.
struct Canvas {
    surface: ImageSurface,
    context: Context,
    viewport: Viewport,
}

/// A [`Backend`] that draws onto a [`cairo`] [`ImageSurface`].
///
/// The surface is created by [`Backend::begin`], sized from the frame's figure size and the
/// backend's resolution. After [`Backend::render`], it can be retrieved with
/// [`CairoBackend::surface`] or [`CairoBackend::into_surface`] and written to any format
/// [`cairo`] supports.
pub struct CairoBackend {
    /// Resolution, in pixels per inch.
    dpi: f64,

    /// Blank space around the plot area, in pixels.
    margin: f64,

    canvas: Option<Canvas>,
}

impl Default for CairoBackend {
    fn default() -> CairoBackend {
        CairoBackend {
            dpi: 100.0,
            margin: 40.0,
            canvas: None,
        }
    }
}

impl CairoBackend {
    /// Creates a backend with a resolution of 100 pixels per inch and a 40 pixel margin.
    pub fn new() -> CairoBackend {
        CairoBackend::default()
    }

    /// Sets the resolution, in pixels per inch. Returns the backend itself to allow chaining.
    pub fn with_dpi(mut self, dpi: f64) -> CairoBackend {
        self.dpi = dpi;
        self
    }

    /// Sets the margin around the plot area, in pixels. Returns the backend itself to allow
    /// chaining.
    pub fn with_margin(mut self, margin: f64) -> CairoBackend {
        self.margin = margin;
        self
    }

    /// Returns the surface of the current drawing, if one has been started.
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.canvas.as_ref().map(|canvas| &canvas.surface)
    }

    /// Consumes the backend, returning the surface of the current drawing, if any.
    pub fn into_surface(self) -> Option<ImageSurface> {
        self.canvas.map(|canvas| canvas.surface)
    }

    /// Returns the mapping between graph and canvas space of the current drawing, if any.
    pub fn viewport(&self) -> Option<Viewport> {
        self.canvas.as_ref().map(|canvas| canvas.viewport)
    }

    fn canvas(&self) -> Result<&Canvas, CairoBackendError> {
        self.canvas.as_ref().ok_or(CairoBackendError::NotStarted)
    }

    /// Converts a length in typographic points to pixels.
    fn points(&self, pt: f64) -> f64 {
        pt * self.dpi / POINTS_PER_INCH
    }

    /// Sets the source color of the context.
    fn set_color(context: &Context, color: Color, alpha: f64) {
        let (r, g, b) = color.rgb();
        context.set_source_rgba(r, g, b, alpha);
    }
}

impl Backend for CairoBackend {
    type Error = CairoBackendError;

    fn begin(&mut self, frame: &Frame) -> Result<(), CairoBackendError> {
        let canvas_size = CanvasPoint(
            (frame.size.0 * self.dpi + 2.0 * self.margin).round() as i32,
            (frame.size.1 * self.dpi + 2.0 * self.margin).round() as i32,
        );
        let surface = ImageSurface::create(Format::ARgb32, canvas_size.0, canvas_size.1)?;
        let context = Context::new(&surface)?;

        context.set_source_rgb(1.0, 1.0, 1.0);
        context.paint()?;
        context.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal);

        log::debug!("created {}x{} cairo surface", canvas_size.0, canvas_size.1);
        self.canvas = Some(Canvas {
            surface,
            context,
            viewport: Viewport {
                canvas_size,
                margin: self.margin,
                x_limits: frame.x_limits,
                y_limits: frame.y_limits,
            },
        });
        Ok(())
    }

    fn draw_grid(&mut self, x_ticks: &[f64], y_ticks: &[f64]) -> Result<(), CairoBackendError> {
        let canvas = self.canvas()?;
        let (context, viewport) = (&canvas.context, &canvas.viewport);
        let (left, top) = (viewport.margin, viewport.margin);
        let right = viewport.canvas_size.0 as f64 - viewport.margin;
        let bottom = viewport.canvas_size.1 as f64 - viewport.margin;

        context.set_source_rgb(0.85, 0.85, 0.85);
        context.set_line_width(self.points(0.8));
        context.set_dash(&[], 0.0);

        // vertical grid lines (x = ...)
        for &x in x_ticks {
            let x_canvas = viewport.x_to_canvas(x);
            context.move_to(x_canvas, top);
            context.line_to(x_canvas, bottom);
        }

        // horizontal grid lines (y = ...)
        for &y in y_ticks {
            let y_canvas = viewport.y_to_canvas(y);
            context.move_to(left, y_canvas);
            context.line_to(right, y_canvas);
        }
        context.stroke()?;

        // tick labels go in the margin, below and to the left of the plot area; a label that
        // would overlap the previous one is skipped
        let padding = 5.0;
        context.set_source_rgb(0.0, 0.0, 0.0);
        context.set_font_size(self.points(8.0));

        let mut free_from = f64::NEG_INFINITY;
        for &x in x_ticks {
            let text = format_value(x);
            let label = context.place_text(&text, (viewport.x_to_canvas(x), bottom + padding), (0.5, 1.0))?;
            let (start, end) = label.x_span();
            if start >= free_from {
                context.show_placed(&label)?;
                free_from = end + padding;
            }
        }

        // y ticks ascend, so their labels go up the canvas
        let mut free_from = f64::INFINITY;
        for &y in y_ticks {
            let text = format_value(y);
            let label = context.place_text(&text, (left - padding, viewport.y_to_canvas(y)), (1.0, 0.5))?;
            let (label_top, label_bottom) = label.y_span();
            if label_bottom <= free_from {
                context.show_placed(&label)?;
                free_from = label_top - padding;
            }
        }

        Ok(())
    }

    fn draw_axes(&mut self) -> Result<(), CairoBackendError> {
        let canvas = self.canvas()?;
        let (context, viewport) = (&canvas.context, &canvas.viewport);
        let origin_canvas = viewport.to_canvas(Vector::ORIGIN);

        context.set_source_rgb(0.0, 0.0, 0.0);
        context.set_line_width(self.points(2.0));
        context.set_dash(&[], 0.0);

        // vertical axis (x = 0)
        if (viewport.x_limits.0..=viewport.x_limits.1).contains(&0.0) {
            context.move_to(origin_canvas.0, viewport.margin);
            context.line_to(origin_canvas.0, viewport.canvas_size.1 as f64 - viewport.margin);
            context.stroke()?;
        }

        // horizontal axis (y = 0)
        if (viewport.y_limits.0..=viewport.y_limits.1).contains(&0.0) {
            context.move_to(viewport.margin, origin_canvas.1);
            context.line_to(viewport.canvas_size.0 as f64 - viewport.margin, origin_canvas.1);
            context.stroke()?;
        }

        Ok(())
    }

    fn draw_points(&mut self, points: &[Vector], color: Color, marker: Marker) -> Result<(), CairoBackendError> {
        let canvas = self.canvas()?;
        let context = &canvas.context;
        let radius = self.points(3.0);
        Self::set_color(context, color, 1.0);

        for &point in points {
            let center = canvas.viewport.to_canvas(point);
            match marker {
                Marker::Dot => {
                    context.arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU);
                    context.fill()?;
                },
                Marker::Cross => {
                    context.set_line_width(self.points(1.5));
                    context.set_dash(&[], 0.0);
                    context.move_to(center.0 - radius, center.1 - radius);
                    context.line_to(center.0 + radius, center.1 + radius);
                    context.move_to(center.0 - radius, center.1 + radius);
                    context.line_to(center.0 + radius, center.1 - radius);
                    context.stroke()?;
                },
            }
        }

        Ok(())
    }

    fn draw_line(&mut self, start: Vector, end: Vector, color: Color, style: LineStyle) -> Result<(), CairoBackendError> {
        let canvas = self.canvas()?;
        let context = &canvas.context;
        let line_width = self.points(1.5);
        let dashes = style.dash_pattern().iter()
            .map(|dash| dash * line_width)
            .collect::<Vec<_>>();

        Self::set_color(context, color, 1.0);
        context.set_line_width(line_width);
        context.set_dash(&dashes, 0.0);

        let (start, end) = (canvas.viewport.to_canvas(start), canvas.viewport.to_canvas(end));
        context.move_to(start.0, start.1);
        context.line_to(end.0, end.1);
        context.stroke()?;
        context.set_dash(&[], 0.0);

        Ok(())
    }

    fn draw_polygon(&mut self, vertices: &[Vector], color: Color, alpha: f64) -> Result<(), CairoBackendError> {
        let canvas = self.canvas()?;
        let context = &canvas.context;

        for (i, &vertex) in vertices.iter().enumerate() {
            let point = canvas.viewport.to_canvas(vertex);
            if i == 0 {
                context.move_to(point.0, point.1);
            } else {
                context.line_to(point.0, point.1);
            }
        }
        context.close_path();

        Self::set_color(context, color, alpha);
        context.fill()?;

        Ok(())
    }

    fn draw_arrow(&mut self, tail: Vector, shaft_end: Vector, head: ArrowHead, color: Color) -> Result<(), CairoBackendError> {
        let canvas = self.canvas()?;
        let (context, viewport) = (&canvas.context, &canvas.viewport);
        Self::set_color(context, color, 1.0);

        let shaft = displacement(shaft_end, tail);
        let shaft_length = length(shaft);
        if shaft_length == 0.0 {
            log::warn!("skipping arrow at {} with no shaft to give the head a direction", tail);
            return Ok(());
        }

        let (tail_canvas, end_canvas) = (viewport.to_canvas(tail), viewport.to_canvas(shaft_end));
        context.set_line_width(self.points(1.5));
        context.set_dash(&[], 0.0);
        context.move_to(tail_canvas.0, tail_canvas.1);
        context.line_to(end_canvas.0, end_canvas.1);
        context.stroke()?;

        // the head is a triangle built in graph space, so it follows the same scaling as the shaft
        let along = shaft * (1.0 / shaft_length);
        let across = Vector(-along.1, along.0);
        let corners = [
            shaft_end + along * head.length,
            shaft_end + across * (head.width / 2.0),
            shaft_end - across * (head.width / 2.0),
        ];
        for (i, &corner) in corners.iter().enumerate() {
            let point = viewport.to_canvas(corner);
            if i == 0 {
                context.move_to(point.0, point.1);
            } else {
                context.line_to(point.0, point.1);
            }
        }
        context.close_path();
        context.fill()?;

        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), CairoBackendError> {
        let canvas = self.canvas()?;
        canvas.surface.flush();
        let mut file = File::create(path)?;
        canvas.surface.write_to_png(&mut file)?;
        log::info!("saved drawing to {}", path.display());
        Ok(())
    }

    fn render(&mut self) -> Result<(), CairoBackendError> {
        let canvas = self.canvas()?;
        canvas.surface.flush();
        log::debug!(
            "rendered {}x{} drawing",
            canvas.viewport.canvas_size.0,
            canvas.viewport.canvas_size.1,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            canvas_size: CanvasPoint(465, 917),
            margin: 20.0,
            x_limits: (-6.59, 0.59),
            y_limits: (-3.28, 8.1),
        }
    }

    /// Test the conversion functions from graph to canvas space.
    #[test]
    fn graph_to_canvas() {
        let viewport = viewport();
        assert_eq!(viewport.x_to_canvas(viewport.x_limits.0), 20.0);
        assert_eq!(viewport.x_to_canvas(viewport.x_limits.1), 445.0);
        assert_eq!(viewport.y_to_canvas(viewport.y_limits.1), 20.0);
        assert_eq!(viewport.y_to_canvas(viewport.y_limits.0), 897.0);
    }

    /// Test the conversion functions from canvas to graph space.
    #[test]
    fn canvas_to_graph() {
        let viewport = viewport();
        let top_left = viewport.to_graph(CanvasPoint(20.0, 20.0));
        let bottom_right = viewport.to_graph(CanvasPoint(445.0, 897.0));
        assert!((top_left.0 - viewport.x_limits.0).abs() < 1e-9);
        assert!((top_left.1 - viewport.y_limits.1).abs() < 1e-9);
        assert!((bottom_right.0 - viewport.x_limits.1).abs() < 1e-9);
        assert!((bottom_right.1 - viewport.y_limits.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip() {
        let viewport = viewport();
        let point = Vector(-2.25, 1.5);
        let back = viewport.to_graph(viewport.to_canvas(point));
        assert!((back.0 - point.0).abs() < 1e-9);
        assert!((back.1 - point.1).abs() < 1e-9);
    }

    #[test]
    fn drawing_requires_begin() {
        let mut backend = CairoBackend::new();
        assert!(matches!(backend.draw_axes(), Err(CairoBackendError::NotStarted)));
        assert!(matches!(backend.render(), Err(CairoBackendError::NotStarted)));
        assert!(backend.surface().is_none());
    }

    #[test]
    fn arrow_without_shaft_skipped() {
        let frame = Frame {
            x_limits: (0.0, 2.0),
            y_limits: (0.0, 2.0),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            size: (1.0, 1.0),
        };
        let mut backend = CairoBackend::new();
        backend.begin(&frame).unwrap();

        // the shaft ends where it starts, so the head has no direction
        let head = ArrowHead { length: 0.5, width: 0.25 };
        backend.draw_arrow(Vector(1.0, 1.0), Vector(1.0, 1.0), head, Color::Red).unwrap();
        backend.render().unwrap();

        let mut surface = backend.into_surface().unwrap();
        let data = surface.data().unwrap();
        assert!(data.iter().all(|&byte| byte == 255));
    }
}
