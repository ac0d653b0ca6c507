#![allow(dead_code)]

use rustlight::{ParallelPolicy, Point, Ray, Scene, Shape, VisibilitySolver};

pub const WIDTH: f64 = 1000.0;
pub const HEIGHT: f64 = 600.0;

/// 1000x600 scene with the given interior obstacles
pub fn boxed_scene(light: (f64, f64), obstacles: &[&[(f64, f64)]]) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT, light.into(), VisibilitySolver::default());
    for vertices in obstacles {
        let points = vertices.iter().map(|&p| Point::from(p)).collect();
        scene
            .add_shape(Shape::new(points).expect("valid obstacle"))
            .expect("closed obstacle");
    }
    scene
}

/// Whether the straight path from `light` to `p` crosses an obstacle before reaching `p`
pub fn blocked_before(light: Point, p: Point, shapes: &[Shape]) -> bool {
    let ray = Ray::towards(light, p);
    match ray.closest_hit(shapes, ParallelPolicy::Ignore) {
        Some(t) => t < 1.0 - 1e-6,
        None => false,
    }
}

fn orientation(a: Point, b: Point, c: Point) -> f64 {
    a.to(b).cross(a.to(c))
}

/// Segments a-b and c-d cross at a single interior point
fn properly_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    const EPS: f64 = 1e-6;
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    o1.abs() > EPS
        && o2.abs() > EPS
        && o3.abs() > EPS
        && o4.abs() > EPS
        && (o1 > 0.0) != (o2 > 0.0)
        && (o3 > 0.0) != (o4 > 0.0)
}

/// No two non-adjacent edges of the closed polygon cross each other
pub fn is_simple(points: &[Point]) -> bool {
    let n = points.len();
    if n < 4 {
        return true;
    }
    for i in 0..n {
        let (a, b) = (points[i], points[(i + 1) % n]);
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (c, d) = (points[j], points[(j + 1) % n]);
            if properly_intersect(a, b, c, d) {
                return false;
            }
        }
    }
    true
}

/// Index of the first point within `tolerance` of (x, y)
pub fn find_near(points: &[Point], x: f64, y: f64, tolerance: f64) -> Option<usize> {
    points
        .iter()
        .position(|p| p.distance(Point::new(x, y)) <= tolerance)
}
