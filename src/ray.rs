use crate::geometry::{LineSegment, Point};
use crate::shape::Shape;
use serde::Deserialize;
use std::f64::consts::TAU;

/// How a ray treats segments parallel to its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallelPolicy {
    /// Parallel segments never intersect, even when the ray runs along them.
    /// This is the classic behaviour and what the renderer uses by default.
    #[default]
    Ignore,
    /// A colinear segment is hit at its nearest point in front of the source
    Colinear,
}

/// Half-line from a source point
/// `d` is the canonical direction angle in [0, 2π), `r` the direction vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub source: Point,
    pub d: f64,
    pub r: Point,
}

/// Wrap an angle into [0, 2π)
pub fn normalize_angle(angle: f64) -> f64 {
    let d = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if d >= TAU {
        0.0
    } else {
        d
    }
}

impl Ray {
    /// Ray from `source` through `target`
    ///
    /// The direction vector is `target - source` and is not normalized, so the
    /// intersection parameter `t` is measured in multiples of that distance.
    pub fn towards(source: Point, target: Point) -> Self {
        let r = source.to(target);
        Ray {
            source,
            d: normalize_angle(r.y.atan2(r.x)),
            r,
        }
    }

    /// Ray from `source` with a unit direction at angle `d`
    pub fn with_direction(source: Point, d: f64) -> Self {
        let mut ray = Ray {
            source,
            d: 0.0,
            r: Point::new(1.0, 0.0),
        };
        ray.set_direction(d);
        ray
    }

    pub fn set_source(&mut self, source: Point) {
        self.source = source;
    }

    /// Overwrite the angle and replace the direction with a unit vector.
    /// The ray no longer remembers the point it was aimed at.
    pub fn set_direction(&mut self, d: f64) {
        self.d = normalize_angle(d);
        self.r.set(d.cos(), d.sin());
    }

    pub fn angle(&self) -> f64 {
        self.d
    }

    /// Source and target coincide, so the ray has no direction
    pub fn is_degenerate(&self) -> bool {
        self.r.x == 0.0 && self.r.y == 0.0
    }

    pub fn point_at(&self, t: f64) -> Point {
        Point::new(self.source.x + self.r.x * t, self.source.y + self.r.y * t)
    }

    /// Parametric distance `t` to where this ray crosses `segment`
    ///
    /// Solves `source + t·r = p1 + u·s` with `s = p2 - p1`. The hit is valid only
    /// for `0 <= u <= 1` (inside the segment) and `t >= 0` (in front of the source).
    /// Returns `None` when there is no valid hit.
    pub fn intersect(&self, segment: &LineSegment, policy: ParallelPolicy) -> Option<f64> {
        let s = segment.direction();
        let denom = self.r.cross(s);
        let qp = self.source.to(segment.p1);

        if denom == 0.0 {
            return match policy {
                ParallelPolicy::Ignore => None,
                ParallelPolicy::Colinear => self.colinear_hit(segment),
            };
        }

        let t = qp.cross(s) / denom;
        let u = qp.cross(self.r) / denom;

        if !(0.0..=1.0).contains(&u) || t < 0.0 {
            return None;
        }
        Some(t)
    }

    fn colinear_hit(&self, segment: &LineSegment) -> Option<f64> {
        if self.is_degenerate() || self.source.to(segment.p1).cross(self.r) != 0.0 {
            return None;
        }

        let len2 = self.r.dot(self.r);
        let t1 = self.source.to(segment.p1).dot(self.r) / len2;
        let t2 = self.source.to(segment.p2).dot(self.r) / len2;
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

        if far < 0.0 {
            None
        } else {
            Some(near.max(0.0))
        }
    }

    /// Smallest valid `t` over every segment of every shape
    pub fn closest_hit(&self, shapes: &[Shape], policy: ParallelPolicy) -> Option<f64> {
        shapes
            .iter()
            .flat_map(|shape| shape.segments())
            .filter_map(|segment| self.intersect(segment, policy))
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Point where this ray first hits any shape, or `None` if it escapes
    pub fn find_closest(&self, shapes: &[Shape], policy: ParallelPolicy) -> Option<Point> {
        self.closest_hit(shapes, policy).map(|t| self.point_at(t))
    }
}
