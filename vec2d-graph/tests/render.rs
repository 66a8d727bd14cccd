use cairo::ImageSurface;
use vec2d_graph::{
    backend::CanvasPoint,
    draw,
    Arrow,
    Backend,
    CairoBackend,
    Color,
    DrawOptions,
    Frame,
    LineStyle,
    Points,
    Polygon,
    Segment,
    Shape,
};

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

/// Options that draw nothing but the shapes, on a white background.
fn bare() -> DrawOptions {
    DrawOptions::default().no_grid().axes(false).origin(false)
}

/// Returns the `[r, g, b]` bytes of the pixel under the given canvas point.
fn pixel(surface: &mut ImageSurface, point: CanvasPoint<f64>) -> [u8; 3] {
    let stride = surface.stride() as usize;
    let offset = point.1.floor() as usize * stride + point.0.floor() as usize * 4;
    let data = surface.data().unwrap();
    let argb = u32::from_ne_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]);
    [(argb >> 16) as u8, (argb >> 8) as u8, argb as u8]
}

/// Draws the shapes with the options, returning the finished surface and a function mapping
/// graph points to canvas points on it.
fn render(shapes: &[Shape], options: &DrawOptions) -> (ImageSurface, impl Fn(f64, f64) -> CanvasPoint<f64>) {
    let mut backend = CairoBackend::new();
    draw(shapes, options, &mut backend).unwrap();
    let viewport = backend.viewport().unwrap();
    let surface = backend.into_surface().unwrap();
    (surface, move |x, y| viewport.to_canvas((x, y).into()))
}

fn shapes() -> Vec<Shape> {
    vec![
        Polygon::new([(1, 1), (5, 1), (3, 4)]).with_fill(Color::Green).into(),
        Segment::new((-2, 3), (4, -1)).with_line_style(LineStyle::DashDot).into(),
        Arrow::new((3, 4)).with_color(Color::Purple).into(),
        Points::new([(1, 1), (5, 1), (3, 4)]).into(),
    ]
}

#[test]
fn surface_sized_from_frame() {
    let mut backend = CairoBackend::new().with_dpi(50.0).with_margin(10.0);
    let frame = draw(&shapes(), &DrawOptions::default(), &mut backend).unwrap();

    // x from -3 to 6, y from -2 to 5, so a 6 inch wide figure is 14 / 3 inches high
    assert_eq!(frame.x_limits, (-3.0, 6.0));
    assert_eq!(frame.y_limits, (-2.0, 5.0));

    let surface = backend.surface().unwrap();
    assert_eq!(surface.width(), 320);
    assert_eq!(surface.height(), (14.0 / 3.0 * 50.0 + 20.0_f64).round() as i32);

    let viewport = backend.viewport().unwrap();
    let origin = viewport.to_canvas((0, 0).into());
    assert!((origin.0 - (10.0 + 300.0 / 9.0 * 3.0)).abs() < 1e-9);
}

#[test]
fn empty_drawing_renders() {
    let mut backend = CairoBackend::new();
    draw(&[], &DrawOptions::default(), &mut backend).unwrap();
    let surface = backend.into_surface().unwrap();
    assert_eq!(surface.width(), 680);
    assert_eq!(surface.height(), 680);
}

#[test]
fn saves_png() {
    let path = std::env::temp_dir().join(format!("vec2d-graph-{}.png", std::process::id()));
    let mut backend = CairoBackend::new();
    draw(&shapes(), &DrawOptions::default().no_grid().save_as(&path), &mut backend).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn backend_usable_directly() {
    let mut backend = CairoBackend::new();
    let frame = draw(&[], &DrawOptions::default().origin(false), &mut backend).unwrap();

    // drawing can continue on the same surface after `draw` returns
    backend.draw_line((-1, -1).into(), (1, 1).into(), Color::Red, LineStyle::Dotted).unwrap();
    backend.render().unwrap();
    assert_eq!(backend.viewport().unwrap().x_limits, frame.x_limits);
}

#[test]
fn dot_in_point_color() {
    let shapes = [Shape::from(Points::new([(1, 1)]).with_color(Color::Rgb(0.0, 0.0, 1.0)))];
    let (mut surface, at) = render(&shapes, &bare());
    assert_eq!(pixel(&mut surface, at(1.0, 1.0)), [0, 0, 255]);
    assert_eq!(pixel(&mut surface, at(0.0, 1.0)), WHITE);
}

#[test]
fn arrow_head_points_at_tip() {
    // x from -0.2 to 4.2, so the head is 0.22 long
    let shapes = [Shape::from(Arrow::new((4, 0)).with_color(Color::Rgb(1.0, 0.0, 0.0)))];
    let (mut surface, at) = render(&shapes, &bare());

    // halfway along the head, on the shaft line
    assert_eq!(pixel(&mut surface, at(3.89, 0.0)), [255, 0, 0]);

    // past the tip
    assert_eq!(pixel(&mut surface, at(4.11, 0.0)), WHITE);

    // beside the shaft, just before the head starts; a head pointing back at the tail would
    // cover this
    assert_eq!(pixel(&mut surface, at(3.67, 0.03)), WHITE);
}

#[test]
fn polygon_fill_blends_with_alpha() {
    for alpha in [0.25, 0.5, 0.75] {
        let polygon = Polygon::new([(0, 0), (4, 0), (0, 4)])
            .without_outline()
            .with_fill(Color::Rgb(0.0, 0.0, 1.0))
            .with_alpha(alpha);
        let (mut surface, at) = render(&[Shape::from(polygon)], &bare());

        // over white, each channel c ends up at 1 - alpha * (1 - c)
        let [r, g, b] = pixel(&mut surface, at(1.0, 1.0));
        let expected = 255.0 * (1.0 - alpha);
        assert!((r as f64 - expected).abs() <= 1.0, "alpha {}: red {}", alpha, r);
        assert!((g as f64 - expected).abs() <= 1.0, "alpha {}: green {}", alpha, g);
        assert_eq!(b, 255);

        // outside the triangle
        assert_eq!(pixel(&mut surface, at(3.0, 3.0)), WHITE);
    }
}

#[test]
fn axes_drawn_only_in_view() {
    let frame = Frame {
        x_limits: (0.5, 10.0),
        y_limits: (-1.0, 1.0),
        x_ticks: Vec::new(),
        y_ticks: Vec::new(),
        size: (2.0, 2.0),
    };
    let mut backend = CairoBackend::new();
    backend.begin(&frame).unwrap();
    backend.draw_axes().unwrap();
    backend.render().unwrap();

    let viewport = backend.viewport().unwrap();
    let mut surface = backend.into_surface().unwrap();

    // y = 0 is visible
    assert_eq!(pixel(&mut surface, viewport.to_canvas((5, 0).into())), BLACK);

    // x = 0 falls in the left margin, outside the view, so no vertical axis is drawn there
    assert_eq!(pixel(&mut surface, viewport.to_canvas((0.0, 0.5).into())), WHITE);
}
