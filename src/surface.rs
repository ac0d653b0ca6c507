use crate::geometry::Point;
use serde::{Deserialize, Serialize};

fn default_alpha() -> f32 { 1.0 }

/// Colour with 8-bit channels and a float opacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255);
    pub const ORANGE: Rgba = Rgba::new(255, 164, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Rgba { a, ..self }
    }
}

/// 2D drawing target the frame is rendered onto
pub trait Surface {
    fn clear(&mut self, color: Rgba);

    /// Fill a polygon that is star-shaped around `hub`
    fn fill_polygon(&mut self, hub: Point, points: &[Point], color: Rgba);

    /// Outline a closed polygon (last point connects back to the first)
    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, thickness: f32);

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, thickness: f32);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    FillPolygon { hub: Point, points: Vec<Point>, color: Rgba },
    StrokePolygon { points: Vec<Point>, color: Rgba, thickness: f32 },
    StrokeLine { from: Point, to: Point, color: Rgba, thickness: f32 },
    FillCircle { center: Point, radius: f64, color: Rgba },
}

/// Surface that only remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        CommandList::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for CommandList {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_polygon(&mut self, hub: Point, points: &[Point], color: Rgba) {
        self.commands.push(DrawCommand::FillPolygon {
            hub,
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, thickness: f32) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color,
            thickness,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, thickness: f32) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            thickness,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}
