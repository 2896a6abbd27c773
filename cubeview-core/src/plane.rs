//! Infinite planes and line intersection
use std::fmt;

use crate::line::{HasPoint, Line};
use crate::point::Point;
use crate::precision::CONFUSION;
use crate::vector::Vector;

/// An infinite plane through `anchor` perpendicular to `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub anchor: Point,
    pub normal: Vector,
}

impl Plane {
    pub fn new(anchor: Point, normal: Vector) -> Self {
        Self { anchor, normal }
    }

    /// Single point where `line` crosses the plane.
    ///
    /// Returns `None` when the line is parallel to the plane, including a line
    /// lying inside it, and when either the line direction or the normal is zero.
    pub fn intersection(&self, line: &Line) -> Option<Point> {
        let denominator = line.direction.dot(&self.normal);
        let scale = line.direction.magnitude() * self.normal.magnitude();
        if denominator.abs() <= CONFUSION * scale {
            return None;
        }

        let numerator = (self.anchor - line.anchor).dot(&self.normal);
        Some(line.point_at(numerator / denominator))
    }
}

impl HasPoint for Plane {
    /// `normal · (point - anchor) = 0`
    fn has_point(&self, point: &Point) -> bool {
        let offset = *point - self.anchor;
        let distance = self.normal.dot(&offset);
        distance.abs() <= CONFUSION * self.normal.magnitude() * offset.magnitude().max(1.0)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane({},{})", self.anchor, self.normal)
    }
}
