//! Free vectors in 3D space
use nalgebra::Vector3;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A displacement or direction in 3D space.
///
/// Operations are componentwise and pure; every method returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(Vector3<f64>);

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn zero() -> Self {
        Self(Vector3::zeros())
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

    /// Euclidean norm
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Vector of length one pointing the same way.
    ///
    /// The zero vector has no direction and maps to itself instead of dividing by zero.
    pub fn unit(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude != 0.0 {
            Self(self.0 / magnitude)
        } else {
            Self::zero()
        }
    }

    /// Right-handed cross product `self × other`
    pub fn cross(&self, other: &Vector) -> Self {
        Self(self.0.cross(&other.0))
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(&other.0)
    }

    /// Angle in radians between `self` and `other`.
    ///
    /// NaN when either vector has zero length.
    pub fn angle(&self, other: &Vector) -> f64 {
        (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Vector3::zeros()
    }

    /// Round every component to `digits` decimal places
    pub fn rounded(&self, digits: i32) -> Self {
        let scale = 10f64.powi(digits);
        Self(self.0.map(|c| (c * scale).round() / scale))
    }

    pub fn as_nalgebra(&self) -> &Vector3<f64> {
        &self.0
    }
}

/// Cross product of two vectors, see [`Vector::cross`].
pub fn cross_product(a: &Vector, b: &Vector) -> Vector {
    a.cross(b)
}

/// Dot product of two vectors, see [`Vector::dot`].
pub fn dot_product(a: &Vector, b: &Vector) -> f64 {
    a.dot(b)
}

/// Angle between two vectors, see [`Vector::angle`].
pub fn angle_between(a: &Vector, b: &Vector) -> f64 {
    a.angle(b)
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self(-self.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Self(self.0 * rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({},{},{})", self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_magnitude() {
        assert!((Vector::new(3.0, 4.0, 0.0).magnitude() - 5.0).abs() < 1e-12);
        assert!((Vector::new(1.0, 2.0, 2.0).magnitude() - 3.0).abs() < 1e-12);
        assert_eq!(Vector::zero().magnitude(), 0.0);
    }

    #[test]
    fn test_unit_vector() {
        for v in [
            Vector::new(3.0, 4.0, 0.0),
            Vector::new(-1000.0, 50.0, 20.0),
            Vector::new(1e-6, 0.0, -2e-6),
        ] {
            assert!((v.unit().magnitude() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unit_of_zero_is_zero() {
        assert_eq!(Vector::zero().unit(), Vector::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_dot_is_symmetric() {
        let a = Vector::new(1.5, -2.0, 3.0);
        let b = Vector::new(-4.0, 0.5, 2.0);
        assert_eq!(dot_product(&a, &b), dot_product(&b, &a));
        assert!((a.dot(&b) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_is_anticommutative() {
        let a = Vector::new(1.5, -2.0, 3.0);
        let b = Vector::new(-4.0, 0.5, 2.0);
        assert_eq!(cross_product(&a, &b), -cross_product(&b, &a));
    }

    #[test]
    fn test_cross_follows_right_hand_rule() {
        let x = Vector::new(1.0, 0.0, 0.0);
        let y = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_angle_between() {
        let x = Vector::new(2.0, 0.0, 0.0);
        let y = Vector::new(0.0, 3.0, 0.0);
        assert!((angle_between(&x, &y) - FRAC_PI_2).abs() < 1e-12);
        assert!(x.angle(&x).abs() < 1e-6);
    }

    #[test]
    fn test_angle_with_zero_vector_is_nan() {
        assert!(Vector::zero().angle(&Vector::new(1.0, 0.0, 0.0)).is_nan());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(0.5, -1.0, 4.0);
        assert_eq!(a + b, Vector::new(1.5, 1.0, 7.0));
        assert_eq!(a - b, Vector::new(0.5, 3.0, -1.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_rounded_and_display() {
        let v = Vector::new(1.23456, -0.00049, 2.0);
        assert_eq!(v.rounded(3), Vector::new(1.235, -0.0, 2.0));
        assert_eq!(Vector::new(1.0, 0.0, -2.5).to_string(), "Vector(1,0,-2.5)");
    }
}
