use serde::{Deserialize, Serialize};

/// A position in canvas coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Move this point in place
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Create a new point shifted by (dx, dy)
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Vector from `self` to `other`
    pub fn to(&self, other: Point) -> Self {
        Point::new(other.x - self.x, other.y - self.y)
    }

    /// 2D cross product, treating both points as vectors
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn distance(&self, other: Point) -> f64 {
        let v = self.to(other);
        v.dot(v).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Segment between two points. Direction only matters for traversal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    pub fn new(p1: Point, p2: Point) -> Self {
        LineSegment { p1, p2 }
    }

    /// Direction vector p2 - p1
    pub fn direction(&self) -> Point {
        self.p1.to(self.p2)
    }
}
