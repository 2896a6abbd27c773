//! Bounded line segments
use std::fmt;

use crate::line::{line_has_point, HasPoint, Line};
use crate::point::{midpoint, Point};
use crate::precision::in_closed_range;
use crate::vector::Vector;

/// A finite segment between two points.
///
/// Shares the line membership test with [`Line`] and additionally requires
/// the point to sit inside the axis-aligned box spanned by the two ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub point0: Point,
    pub point1: Point,
}

impl Edge {
    pub fn new(point0: Point, point1: Point) -> Self {
        Self { point0, point1 }
    }

    /// `point1 - point0`
    pub fn direction(&self) -> Vector {
        self.point1 - self.point0
    }

    /// The infinite line carrying this edge, anchored at `point0`
    pub fn line(&self) -> Line {
        Line::new(self.point0, self.direction())
    }

    pub fn length(&self) -> f64 {
        self.direction().magnitude()
    }

    pub fn midpoint(&self) -> Point {
        midpoint(&self.point0, &self.point1)
    }

    fn bounds_contain(&self, point: &Point) -> bool {
        let (a, b) = (&self.point0, &self.point1);
        in_closed_range(point.x(), a.x(), b.x())
            && in_closed_range(point.y(), a.y(), b.y())
            && in_closed_range(point.z(), a.z(), b.z())
    }
}

impl HasPoint for Edge {
    fn has_point(&self, point: &Point) -> bool {
        line_has_point(&self.point0, &self.direction(), point) && self.bounds_contain(point)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({},{})", self.point0, self.point1)
    }
}
