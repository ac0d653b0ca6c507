use crate::geometry::Point;
use crate::surface::{Rgba, Surface};
use macroquad::prelude::{clear_background, draw_circle, draw_line, draw_triangle, vec2, Color, Vec2};

/// Draws onto the macroquad window
pub struct MacroquadSurface;

fn to_color(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, (c.a.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn to_vec2(p: Point) -> Vec2 {
    vec2(p.x as f32, p.y as f32)
}

impl Surface for MacroquadSurface {
    fn clear(&mut self, c: Rgba) {
        clear_background(to_color(c));
    }

    fn fill_polygon(&mut self, hub: Point, points: &[Point], c: Rgba) {
        if points.len() < 2 {
            return;
        }
        let hub = to_vec2(hub);
        let c = to_color(c);
        for (i, &p) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            draw_triangle(hub, to_vec2(p), to_vec2(next), c);
        }
    }

    fn stroke_polygon(&mut self, points: &[Point], c: Rgba, thickness: f32) {
        let Some(&last) = points.last() else {
            return;
        };
        let c = to_color(c);
        let mut from = last;
        for &to in points {
            draw_line(from.x as f32, from.y as f32, to.x as f32, to.y as f32, thickness, c);
            from = to;
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, c: Rgba, thickness: f32) {
        draw_line(from.x as f32, from.y as f32, to.x as f32, to.y as f32, thickness, to_color(c));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, c: Rgba) {
        draw_circle(center.x as f32, center.y as f32, radius as f32, to_color(c));
    }
}
