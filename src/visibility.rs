//! Visibility polygon solver
//!
//! Rays are cast from the light towards every obstacle vertex, sorted by angle and
//! resolved to their nearest hit. The hits, in angular order, trace the boundary of
//! the region the light can see.

use crate::geometry::Point;
use crate::ray::{ParallelPolicy, Ray};
use crate::shape::Shape;
use anyhow::{anyhow, Result};
use serde::Serialize;

/// Jitter unit used by the renderer
pub const DEFAULT_JITTER: f64 = 0.001;

/// Offsets applied to each obstacle vertex before a ray is aimed at it
///
/// Aiming slightly to both sides of a vertex yields one hit on the obstacle and
/// one hit on whatever lies behind it, so shadow edges come out sharp.
#[derive(Debug, Clone, PartialEq)]
pub struct JitterFan {
    offsets: Vec<(f64, f64)>,
}

impl JitterFan {
    /// Five rays: the vertex itself plus two offsets on each side, in multiples of `unit`
    pub fn scaled(unit: f64) -> Self {
        JitterFan {
            offsets: vec![
                (0.0, 0.0),
                (2.0 * unit, unit),
                (unit, unit),
                (-unit, -unit),
                (-2.0 * unit, -unit),
            ],
        }
    }

    /// One ray straight at each vertex
    pub fn single() -> Self {
        JitterFan {
            offsets: vec![(0.0, 0.0)],
        }
    }

    pub fn offsets(&self) -> &[(f64, f64)] {
        &self.offsets
    }
}

impl Default for JitterFan {
    fn default() -> Self {
        JitterFan::scaled(DEFAULT_JITTER)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VisibilitySolver {
    pub fan: JitterFan,
    pub parallel: ParallelPolicy,
}

impl VisibilitySolver {
    pub fn new(fan: JitterFan, parallel: ParallelPolicy) -> Self {
        VisibilitySolver { fan, parallel }
    }

    /// Rays towards every jittered vertex of every occluder, sorted by angle
    ///
    /// The sort is stable, so rays with equal angles keep their casting order.
    /// Rays whose target coincides with the light have no direction and are skipped.
    pub fn cast_rays(&self, light: Point, shapes: &[Shape]) -> Vec<Ray> {
        let fan = &self.fan;
        let mut rays: Vec<Ray> = shapes
            .iter()
            .filter(|shape| shape.is_occluder())
            .flat_map(|shape| shape.points())
            .flat_map(|vertex| {
                fan.offsets()
                    .iter()
                    .map(move |&(dx, dy)| Ray::towards(light, vertex.offset(dx, dy)))
            })
            .filter(|ray| !ray.is_degenerate())
            .collect();

        rays.sort_by(|a, b| a.angle().total_cmp(&b.angle()));
        rays
    }

    /// Nearest hit for each ray, in the same order
    ///
    /// A ray that hits nothing means the scene is not enclosed; that is an error.
    pub fn resolve(&self, rays: &[Ray], shapes: &[Shape]) -> Result<Vec<Point>> {
        rays.iter()
            .map(|ray| {
                ray.find_closest(shapes, self.parallel).ok_or_else(|| {
                    anyhow!(
                        "ray at angle {:.6} from ({}, {}) hit no obstacle, is the scene border missing?",
                        ray.angle(),
                        ray.source.x,
                        ray.source.y
                    )
                })
            })
            .collect()
    }

    pub fn solve(&self, light: Point, shapes: &[Shape]) -> Result<VisibilityPolygon> {
        let rays = self.cast_rays(light, shapes);
        let points = self.resolve(&rays, shapes)?;
        Ok(VisibilityPolygon::new(light, points))
    }
}

/// Region visible from `source`, as an outline ordered by angle around it
///
/// The outline is star-shaped around `source`, which the renderer relies on
/// when filling it as a triangle fan.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityPolygon {
    pub source: Point,
    pub outline: Shape,
}

#[derive(Serialize)]
struct PolygonExport<'a> {
    source: Point,
    points: &'a [Point],
}

impl VisibilityPolygon {
    pub fn new(source: Point, points: Vec<Point>) -> Self {
        VisibilityPolygon {
            source,
            outline: Shape::outline(points),
        }
    }

    pub fn points(&self) -> &[Point] {
        self.outline.points()
    }

    pub fn len(&self) -> usize {
        self.outline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Same polygon with clustered and colinear points removed
    ///
    /// Consecutive points closer than `tolerance` collapse into the first of them
    /// (also across the wrap from last to first). A point is then dropped when it
    /// lies between its neighbours within `tolerance` of the line joining them.
    pub fn simplified(&self, tolerance: f64) -> VisibilityPolygon {
        let mut kept: Vec<Point> = Vec::with_capacity(self.len());
        for &p in self.points() {
            if kept.last().map_or(true, |q| q.distance(p) > tolerance) {
                kept.push(p);
            }
        }
        while kept.len() > 1 && kept[0].distance(kept[kept.len() - 1]) <= tolerance {
            kept.pop();
        }

        loop {
            let before = kept.len();
            let mut i = 0;
            while kept.len() >= 3 && i < kept.len() {
                let n = kept.len();
                let prev = kept[(i + n - 1) % n];
                let next = kept[(i + 1) % n];
                if lies_between(prev, kept[i], next, tolerance) {
                    kept.remove(i);
                    i = i.saturating_sub(1);
                } else {
                    i += 1;
                }
            }
            if kept.len() == before {
                break;
            }
        }

        VisibilityPolygon::new(self.source, kept)
    }

    pub fn to_json(&self) -> Result<String> {
        let export = PolygonExport {
            source: self.source,
            points: self.points(),
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}

/// `p` sits on the segment prev..next, within `tolerance`
fn lies_between(prev: Point, p: Point, next: Point, tolerance: f64) -> bool {
    let base = prev.to(next);
    let len2 = base.dot(base);
    if len2 <= tolerance * tolerance {
        return false;
    }

    let along = prev.to(p).dot(base);
    if along < 0.0 || along > len2 {
        return false;
    }
    (base.cross(prev.to(p))).abs() / len2.sqrt() <= tolerance
}
