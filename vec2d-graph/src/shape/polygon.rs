use vec2d_math::Vector;
use crate::{backend::Backend, frame::Frame, style::{Color, LineStyle}};

/// A polygon on the 2D plane, defined by its vertices.
///
/// By default, the edges are drawn in blue with solid lines and the polygon is not filled. If a
/// fill color is given, the polygon is filled with that color, blended with an opacity of
/// [`alpha`](Polygon::alpha) (`0.4` by default).
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// The vertices of the polygon, in order. The last vertex connects back to the first.
    pub vertices: Vec<Vector>,

    /// The color of the edges, or [`None`] to draw no edges.
    pub color: Option<Color>,

    /// The fill color, or [`None`] to leave the polygon unfilled.
    pub fill: Option<Color>,

    /// The opacity of the fill, in the range `0.0` to `1.0`.
    pub alpha: f64,

    /// The style of the edges.
    pub line_style: LineStyle,
}

impl Polygon {
    /// Creates a new polygon with the given vertices.
    pub fn new<V: Into<Vector>>(vertices: impl IntoIterator<Item = V>) -> Polygon {
        Polygon {
            vertices: vertices.into_iter().map(Into::into).collect(),
            color: Some(Color::Blue),
            fill: None,
            alpha: 0.4,
            line_style: LineStyle::Solid,
        }
    }

    /// Sets the color of the edges.
    ///
    /// Returns the polygon itself to allow chaining.
    pub fn with_color(mut self, color: impl Into<Color>) -> Polygon {
        self.color = Some(color.into());
        self
    }

    /// Hides the edges, which is mostly useful with a fill color.
    ///
    /// Returns the polygon itself to allow chaining.
    pub fn without_outline(mut self) -> Polygon {
        self.color = None;
        self
    }

    /// Sets the fill color.
    ///
    /// Returns the polygon itself to allow chaining.
    pub fn with_fill(mut self, fill: impl Into<Color>) -> Polygon {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the opacity of the fill.
    ///
    /// Returns the polygon itself to allow chaining.
    pub fn with_alpha(mut self, alpha: f64) -> Polygon {
        self.alpha = alpha;
        self
    }

    /// Sets the line style of the edges.
    ///
    /// Returns the polygon itself to allow chaining.
    pub fn with_line_style(mut self, line_style: LineStyle) -> Polygon {
        self.line_style = line_style;
        self
    }

    /// Returns the vectors that define the shape.
    pub fn vectors(&self) -> Vec<Vector> {
        self.vertices.clone()
    }

    pub(crate) fn render<B: Backend>(&self, _: &Frame, backend: &mut B) -> Result<(), B::Error> {
        // fill first, so the edges are painted on top of it
        if let Some(fill) = self.fill {
            backend.draw_polygon(&self.vertices, fill, self.alpha)?;
        }

        if let Some(color) = self.color {
            let n = self.vertices.len();
            for i in 0..n {
                backend.draw_line(self.vertices[i], self.vertices[(i + 1) % n], color, self.line_style)?;
            }
        }

        Ok(())
    }
}
