use std::{convert::Infallible, path::{Path, PathBuf}};
use vec2d_math::Vector;
use crate::{frame::Frame, style::{Color, LineStyle, Marker}};
use super::{ArrowHead, Backend};

/// A single call made on a [`Backend`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// [`Backend::begin`]: a drawing started with this frame.
    Begin(Frame),

    /// [`Backend::draw_grid`]: grid lines at the given ticks.
    Grid { x_ticks: Vec<f64>, y_ticks: Vec<f64> },

    /// [`Backend::draw_axes`].
    Axes,

    /// [`Backend::draw_points`]: markers at each point.
    Points { points: Vec<Vector>, color: Color, marker: Marker },

    /// [`Backend::draw_line`]: a single straight line.
    Line { start: Vector, end: Vector, color: Color, style: LineStyle },

    /// [`Backend::draw_polygon`]: a filled polygon, with the fill opacity.
    Polygon { vertices: Vec<Vector>, color: Color, alpha: f64 },

    /// [`Backend::draw_arrow`]: a shaft from `tail` to `shaft_end`, then the head.
    Arrow { tail: Vector, shaft_end: Vector, head: ArrowHead, color: Color },

    /// [`Backend::save`]: the drawing was saved to this path.
    Save(PathBuf),

    /// [`Backend::render`].
    Render,
}

/// A [`Backend`] that records every call it receives instead of rendering.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: Vec<Command>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Recorder {
        Recorder::default()
    }

    /// Returns the recorded commands, in the order they were received.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Consumes the recorder, returning the recorded commands.
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Returns the number of times [`Backend::render`] was called.
    pub fn render_count(&self) -> usize {
        self.commands.iter()
            .filter(|command| matches!(command, Command::Render))
            .count()
    }

    fn push(&mut self, command: Command) -> Result<(), Infallible> {
        self.commands.push(command);
        Ok(())
    }
}

impl Backend for Recorder {
    type Error = Infallible;

    fn begin(&mut self, frame: &Frame) -> Result<(), Infallible> {
        self.push(Command::Begin(frame.clone()))
    }

    fn draw_grid(&mut self, x_ticks: &[f64], y_ticks: &[f64]) -> Result<(), Infallible> {
        self.push(Command::Grid { x_ticks: x_ticks.to_vec(), y_ticks: y_ticks.to_vec() })
    }

    fn draw_axes(&mut self) -> Result<(), Infallible> {
        self.push(Command::Axes)
    }

    fn draw_points(&mut self, points: &[Vector], color: Color, marker: Marker) -> Result<(), Infallible> {
        self.push(Command::Points { points: points.to_vec(), color, marker })
    }

    fn draw_line(&mut self, start: Vector, end: Vector, color: Color, style: LineStyle) -> Result<(), Infallible> {
        self.push(Command::Line { start, end, color, style })
    }

    fn draw_polygon(&mut self, vertices: &[Vector], color: Color, alpha: f64) -> Result<(), Infallible> {
        self.push(Command::Polygon { vertices: vertices.to_vec(), color, alpha })
    }

    fn draw_arrow(&mut self, tail: Vector, shaft_end: Vector, head: ArrowHead, color: Color) -> Result<(), Infallible> {
        self.push(Command::Arrow { tail, shaft_end, head, color })
    }

    fn save(&mut self, path: &Path) -> Result<(), Infallible> {
        self.push(Command::Save(path.to_path_buf()))
    }

    fn render(&mut self) -> Result<(), Infallible> {
        self.push(Command::Render)
    }
}
