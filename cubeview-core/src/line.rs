//! Infinite lines and the point-membership capability
use std::fmt;

use crate::point::Point;
use crate::precision::is_negligible;
use crate::vector::Vector;

/// Anything that can answer whether a point lies on it.
pub trait HasPoint {
    fn has_point(&self, point: &Point) -> bool;
}

/// An infinite line through `anchor` along `direction`.
///
/// The direction does not need to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub anchor: Point,
    pub direction: Vector,
}

impl Line {
    pub fn new(anchor: Point, direction: Vector) -> Self {
        Self { anchor, direction }
    }

    /// Point reached after travelling `t` direction lengths from the anchor
    pub fn point_at(&self, t: f64) -> Point {
        self.anchor + self.direction * t
    }
}

impl HasPoint for Line {
    fn has_point(&self, point: &Point) -> bool {
        line_has_point(&self.anchor, &self.direction, point)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({},{})", self.anchor, self.direction)
    }
}

/// Membership test for the line through `anchor` along `direction`.
///
/// Follows the symmetric form `(x-x0)/dx = (y-y0)/dy = (z-z0)/dz`, with each
/// pair of ratios cross-multiplied so no axis is divided by a small component.
/// An axis whose direction component is negligible next to the whole direction
/// is tested by comparing the coordinate with the anchor's instead:
///
/// * no zero axis: all three ratios must agree
/// * one zero axis: that coordinate must match, the other two ratios must agree
/// * two zero axes: both coordinates must match, the third axis is free
/// * zero direction: never on the line
pub fn line_has_point(anchor: &Point, direction: &Vector, point: &Point) -> bool {
    let length = direction.magnitude();
    if length == 0.0 {
        tracing::trace!(%anchor, "line membership on a zero direction");
        return false;
    }

    let offset = *point - *anchor;
    // rounding in `offset` grows with the coordinates it was taken from
    let scale = offset
        .magnitude()
        .max(point.to_vector().as_nalgebra().amax())
        .max(anchor.to_vector().as_nalgebra().amax())
        .max(1.0);

    let axes = [
        (offset.x(), direction.x()),
        (offset.y(), direction.y()),
        (offset.z(), direction.z()),
    ];

    let mut reference: Option<(f64, f64)> = None;
    for (o, d) in axes {
        if is_negligible(d, length) {
            if !is_negligible(o, scale) {
                return false;
            }
            continue;
        }

        match reference {
            // o0 / d0 == o / d
            Some((o0, d0)) if !is_negligible(o0 * d - o * d0, scale * length) => return false,
            Some(_) => {}
            None => reference = Some((o, d)),
        }
    }
    true
}
