//! Three-component vector used for positions, displacements and raw
//! acceleration samples.
//!
//! The in-place methods (`add`, `sub`, `scalar_multiply`, ...) are the
//! primary API; the operator impls are conveniences built on top of them.

use serde::{Deserialize, Serialize};

use crate::quaternion::Quaternion;

/// A 3D vector in whatever frame the caller assigns to it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// The origin.
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate in place by `q` using the sandwich product `q * v * q^-1`.
    ///
    /// The vector is embedded as a pure quaternion (w = 0). `q` is assumed to
    /// be a unit quaternion so that its conjugate is its inverse.
    pub fn rotate_by(&mut self, q: &Quaternion) {
        let p = Quaternion::from_vector(self);
        let mut inverse = *q;
        inverse.conjugate();

        let mut b = *q;
        b.multiply(&p);
        b.multiply(&inverse);

        self.x = b.x;
        self.y = b.y;
        self.z = b.z;
    }

    pub fn add(&mut self, v: &Vector3) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
    }

    pub fn sub(&mut self, v: &Vector3) {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
    }

    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    pub fn zero(&mut self) {
        *self = Self::ZERO;
    }

    pub fn scalar_multiply(&mut self, k: f32) {
        self.x *= k;
        self.y *= k;
        self.z *= k;
    }

    /// Scale to unit length.
    ///
    /// Returns `false` and leaves the vector untouched when its norm is
    /// exactly zero.
    pub fn normalize(&mut self) -> bool {
        let k = self.norm();
        if k == 0.0 {
            return false;
        }
        self.scalar_multiply(1.0 / k);
        true
    }

    /// Euclidean length.
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to `v`.
    pub fn distance(&self, v: &Vector3) -> f32 {
        let mut d = *self;
        d.sub(v);
        d.norm()
    }

    pub fn dot_product(&self, v: &Vector3) -> f32 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Exact componentwise equality. No tolerance is applied.
    pub fn equals(&self, v: &Vector3) -> bool {
        self.x == v.x && self.y == v.y && self.z == v.z
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

// The ops traits are referenced by path so that `v.add(..)` and `v.sub(..)`
// keep resolving to the in-place methods inside this module.
impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(mut self) -> Vector3 {
        self.negate();
        self
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(mut self, k: f32) -> Vector3 {
        self.scalar_multiply(k);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_add_and_sub_are_componentwise() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.add(&Vector3::new(0.5, -1.0, 2.0));
        assert!(v.equals(&Vector3::new(1.5, 1.0, 5.0)));

        v.sub(&Vector3::new(1.5, 1.0, 5.0));
        assert!(v.equals(&Vector3::ZERO));
    }

    #[test]
    fn test_negate_and_zero() {
        let mut v = Vector3::new(1.0, -2.0, 3.0);
        v.negate();
        assert_eq!(v, Vector3::new(-1.0, 2.0, -3.0));

        v.zero();
        assert_eq!(v, Vector3::ZERO);
    }

    #[test]
    fn test_normalize_nonzero() {
        let original = Vector3::new(3.0, 4.0, 12.0);
        let mut v = original;

        assert!(v.normalize());
        assert!((v.norm() - 1.0).abs() < EPS, "norm was {}", v.norm());
        assert!(v.dot_product(&original) > 0.0, "direction must be preserved");
        assert!((v.x - 3.0 / 13.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        let mut v = Vector3::ZERO;
        assert!(!v.normalize());
        assert!(v.equals(&Vector3::ZERO));
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_distance_does_not_mutate() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(4.0, 5.0, 1.0);

        assert!((a.distance(&b) - 5.0).abs() < EPS);
        assert_eq!(a, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_equals_is_exact() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        let b = Vector3::new(0.1, 0.2, 0.3 + 1e-6);
        assert!(a.equals(&a));
        assert!(!a.equals(&b));
    }

    #[test]
    fn test_rotate_by_quarter_turn_about_z() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let mut v = Vector3::new(1.0, 0.0, 0.0);
        v.rotate_by(&q);

        assert!(v.x.abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);
        assert!(v.z.abs() < EPS);
    }

    #[test]
    fn test_rotate_by_identity_is_noop() {
        let mut v = Vector3::new(0.3, -2.0, 7.5);
        v.rotate_by(&Quaternion::identity());
        assert!(v.distance(&Vector3::new(0.3, -2.0, 7.5)) < EPS);
    }

    #[test]
    fn test_operators_match_in_place_methods() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-1.0, 0.5, 2.0);

        assert_eq!(a + b, Vector3::new(0.0, 2.5, 5.0));
        assert_eq!(a - b, Vector3::new(2.0, 1.5, 1.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
    }
}
