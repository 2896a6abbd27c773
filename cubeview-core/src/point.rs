//! Positions in 3D space
use nalgebra::Point3;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::vector::Vector;

/// A position in 3D space.
///
/// Equality is exact componentwise equality. Points are mutable in place so a
/// cuboid can move its vertices without reallocating them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Point3<f64>);

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3::new(x, y, z))
    }

    pub fn origin() -> Self {
        Self(Point3::origin())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn set_x(&mut self, x: f64) {
        self.0.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.0.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.0.z = z;
    }

    /// Displacement from the origin to this point
    pub fn to_vector(&self) -> Vector {
        Vector::from(self.0.coords)
    }

    /// Round every coordinate to `digits` decimal places
    pub fn rounded(&self, digits: i32) -> Self {
        let scale = 10f64.powi(digits);
        Self(self.0.map(|c| (c * scale).round() / scale))
    }

    pub fn as_nalgebra(&self) -> &Point3<f64> {
        &self.0
    }
}

/// Point halfway between `a` and `b`.
pub fn midpoint(a: &Point, b: &Point) -> Point {
    Point(nalgebra::center(&a.0, &b.0))
}

impl From<Point3<f64>> for Point {
    fn from(p: Point3<f64>) -> Self {
        Self(p)
    }
}

impl From<Point> for Point3<f64> {
    fn from(p: Point) -> Self {
        p.0
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::from(self.0 - rhs.0)
    }
}

/// Componentwise sum, used as a translation helper.
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Self(Point3::from(self.0.coords + rhs.0.coords))
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Self(self.0 + *rhs.as_nalgebra())
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.0 += *rhs.as_nalgebra();
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({},{},{})", self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_displacement() {
        let a = Point::new(5.0, 2.0, -1.0);
        let b = Point::new(1.0, 4.0, 3.0);
        assert_eq!(a - b, Vector::new(4.0, -2.0, -4.0));
        assert_eq!(b + (a - b), a);
    }

    #[test]
    fn test_point_sum() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(10.0, 20.0, 30.0);
        assert_eq!(a + b, Point::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_translate_in_place() {
        let mut p = Point::origin();
        p += Vector::new(1.0, -1.0, 2.0);
        p.set_z(7.0);
        assert_eq!(p, Point::new(1.0, -1.0, 7.0));
    }

    #[test]
    fn test_to_vector() {
        let p = Point::new(3000.0, -2.0, 0.5);
        assert_eq!(p.to_vector(), Vector::new(3000.0, -2.0, 0.5));
        assert_eq!(Point::origin() + p.to_vector(), p);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(&Point::new(0.0, 0.0, 0.0), &Point::new(2.0, -4.0, 6.0));
        assert_eq!(m, Point::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_equality_is_exact() {
        assert_ne!(Point::new(1.0, 1.0, 1.0), Point::new(1.0, 1.0, 1.0 + 1e-12));
    }

    #[test]
    fn test_rounded_and_display() {
        assert_eq!(
            Point::new(0.1 + 0.2, 1.0, -3.0).rounded(6),
            Point::new(0.3, 1.0, -3.0)
        );
        assert_eq!(Point::new(3000.0, 0.0, -0.5).to_string(), "Point(3000,0,-0.5)");
    }
}
