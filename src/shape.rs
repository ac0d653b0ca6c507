use crate::geometry::{LineSegment, Point};
use anyhow::{bail, Result};

/// Ordered list of points, optionally closed into a boundary of segments
///
/// Occluders are built with [`Shape::new`]: every point connects to the next and
/// the last one wraps back to the first, so there are as many segments as points.
/// [`Shape::outline`] keeps only the points; it can be drawn but blocks nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    points: Vec<Point>,
    segments: Vec<LineSegment>,
}

impl Shape {
    /// Closed obstacle. Needs at least two finite points.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            bail!("obstacle needs at least 2 points, got {}", points.len());
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            bail!("obstacle point ({}, {}) is not finite", p.x, p.y);
        }

        let segments = points
            .iter()
            .enumerate()
            .map(|(i, &p)| LineSegment::new(p, points[(i + 1) % points.len()]))
            .collect();

        Ok(Shape { points, segments })
    }

    /// Point list without segments (used for computed visibility polygons)
    pub fn outline(points: Vec<Point>) -> Self {
        Shape {
            points,
            segments: Vec::new(),
        }
    }

    /// The four canvas edges, each as its own two-point shape
    pub fn border(width: f64, height: f64) -> Vec<Shape> {
        let edge = |a: (f64, f64), b: (f64, f64)| Shape {
            points: vec![a.into(), b.into()],
            segments: vec![
                LineSegment::new(a.into(), b.into()),
                LineSegment::new(b.into(), a.into()),
            ],
        };

        vec![
            edge((0.0, height), (0.0, 0.0)),
            edge((0.0, height), (width, height)),
            edge((width, height), (width, 0.0)),
            edge((0.0, 0.0), (width, 0.0)),
        ]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Whether this shape blocks rays
    pub fn is_occluder(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
