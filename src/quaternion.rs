//! Orientation quaternion and Euler-angle extraction.
//!
//! Components are stored as `(x, y, z, w)` with `w` the scalar part. The
//! extraction routines follow the heading/attitude/bank convention: yaw is the
//! rotation about the Y axis, pitch about Z and roll about X, with a shared
//! pole test on `x*y + z*w`.
//!
//! Near the poles (|test| > 0.4999) yaw and roll are not independent, so yaw
//! absorbs the whole rotation and roll is pinned to zero.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// Pole threshold for Euler extraction. Equivalent to a pitch of about 88.9°.
pub const SINGULARITY_THRESHOLD: f32 = 0.4999;

/// A rotation quaternion.
///
/// Orientation-bearing instances are expected to have unit norm, but nothing
/// here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

/// Euler angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawPitchRoll {
    /// Rotation about the vertical (Y) axis.
    pub yaw: f32,
    /// Rotation about Z, in [-π/2, π/2].
    pub pitch: f32,
    /// Rotation about X.
    pub roll: f32,
}

impl Quaternion {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Identity quaternion (no rotation).
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Embed a vector as a pure quaternion (w = 0).
    pub fn from_vector(v: &Vector3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Rotation of `theta` radians about `axis`.
    ///
    /// The axis does not need to be unit length. A zero axis yields a
    /// quaternion with a zero vector part.
    pub fn from_axis_angle(axis: &Vector3, theta: f32) -> Self {
        let mut v = *axis;
        v.normalize();
        v.scalar_multiply((theta / 2.0).sin());
        Self::new(v.x, v.y, v.z, (theta / 2.0).cos())
    }

    /// Negate the vector part in place.
    pub fn conjugate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Compose in place: `self = self * q` (Hamilton product).
    pub fn multiply(&mut self, q: &Quaternion) {
        let nw = self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z;
        let nx = self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y;
        let ny = self.w * q.y - self.x * q.z + self.y * q.w + self.z * q.x;
        let nz = self.w * q.z + self.x * q.y - self.y * q.x + self.z * q.w;
        self.w = nw;
        self.x = nx;
        self.y = ny;
        self.z = nz;
    }

    /// Euclidean norm of all four components.
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    fn pole_test(&self) -> f32 {
        self.x * self.y + self.z * self.w
    }

    /// Rotation about the Z axis.
    pub fn pitch(&self) -> f32 {
        let test = self.pole_test();
        if test > SINGULARITY_THRESHOLD {
            return FRAC_PI_2;
        }
        if test < -SINGULARITY_THRESHOLD {
            return -FRAC_PI_2;
        }
        (2.0 * test).asin()
    }

    /// Rotation about the Y axis, i.e. heading.
    pub fn yaw(&self) -> f32 {
        let test = self.pole_test();
        if test > SINGULARITY_THRESHOLD {
            return 2.0 * self.x.atan2(self.w);
        }
        if test < -SINGULARITY_THRESHOLD {
            return -2.0 * self.x.atan2(self.w);
        }
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        (2.0 * y * w - 2.0 * x * z).atan2(1.0 - 2.0 * (y * y + z * z))
    }

    /// Rotation about the X axis, i.e. bank. Zero at either pole.
    pub fn roll(&self) -> f32 {
        let test = self.pole_test();
        if test > SINGULARITY_THRESHOLD || test < -SINGULARITY_THRESHOLD {
            return 0.0;
        }
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        (2.0 * (x * w - y * z)).atan2(1.0 - 2.0 * (x * x + z * z))
    }

    pub fn euler_angles(&self) -> YawPitchRoll {
        YawPitchRoll {
            yaw: self.yaw(),
            pitch: self.pitch(),
            roll: self.roll(),
        }
    }

    /// Exact componentwise equality. No tolerance is applied.
    pub fn equals(&self, q: &Quaternion) -> bool {
        self.x == q.x && self.y == q.y && self.z == q.z && self.w == q.w
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Quaternion> for YawPitchRoll {
    fn from(q: Quaternion) -> Self {
        q.euler_angles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx_eq(a: &Quaternion, b: &Quaternion) -> bool {
        (a.x - b.x).abs() < EPS
            && (a.y - b.y).abs() < EPS
            && (a.z - b.z).abs() < EPS
            && (a.w - b.w).abs() < EPS
    }

    fn product(a: &Quaternion, b: &Quaternion) -> Quaternion {
        let mut r = *a;
        r.multiply(b);
        r
    }

    fn y_axis() -> Vector3 {
        Vector3::new(0.0, 1.0, 0.0)
    }

    #[test]
    fn test_identity_components() {
        let q = Quaternion::identity();
        assert!(q.equals(&Quaternion::new(0.0, 0.0, 0.0, 1.0)));
        assert!(q.equals(&Quaternion::default()));
    }

    #[test]
    fn test_from_vector_is_pure() {
        let q = Quaternion::from_vector(&Vector3::new(1.0, 2.0, 3.0));
        assert!(q.equals(&Quaternion::new(1.0, 2.0, 3.0, 0.0)));
    }

    #[test]
    fn test_from_axis_angle_normalizes_axis() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 5.0, 0.0), 1.0);
        assert!((q.y - 0.5f32.sin()).abs() < EPS);
        assert!((q.w - 0.5f32.cos()).abs() < EPS);
        assert!((q.norm() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_multiply_is_associative() {
        let a = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), 0.3);
        let b = Quaternion::from_axis_angle(&Vector3::new(0.0, 1.0, 0.0), -1.2);
        let c = Quaternion::from_axis_angle(&Vector3::new(1.0, 1.0, 1.0), 2.0);

        let left = product(&product(&a, &b), &c);
        let right = product(&a, &product(&b, &c));
        assert!(approx_eq(&left, &right), "{:?} != {:?}", left, right);
    }

    #[test]
    fn test_multiply_is_not_commutative() {
        let a = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), 0.7);
        let b = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), 0.7);

        assert!(!approx_eq(&product(&a, &b), &product(&b, &a)));
    }

    #[test]
    fn test_double_conjugate_is_original() {
        let original = Quaternion::new(0.1, -0.2, 0.3, 0.9);
        let mut q = original;
        q.conjugate();
        assert!(q.equals(&Quaternion::new(-0.1, 0.2, -0.3, 0.9)));
        q.conjugate();
        assert!(q.equals(&original));
    }

    #[test]
    fn test_unit_times_conjugate_is_identity() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.3, -0.5, 0.8), 1.1);
        let mut inverse = q;
        inverse.conjugate();

        assert!(approx_eq(&product(&q, &inverse), &Quaternion::identity()));
    }

    #[test]
    fn test_norm_of_unit_and_scaled() {
        assert!((Quaternion::identity().norm() - 1.0).abs() < EPS);
        assert!((Quaternion::new(1.0, 2.0, 2.0, 4.0).norm() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_yaw_round_trip() {
        for &angle in &[-2.5f32, -1.0, -0.1, 0.0, 0.4, 1.3, 3.0] {
            let q = Quaternion::from_axis_angle(&y_axis(), angle);
            assert!(
                (q.yaw() - angle).abs() < 1e-4,
                "angle {} extracted as {}",
                angle,
                q.yaw()
            );
            assert!(q.pitch().abs() < EPS);
            assert!(q.roll().abs() < EPS);
        }
    }

    #[test]
    fn test_pitch_round_trip() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), 0.8);
        assert!((q.pitch() - 0.8).abs() < 1e-4);
        assert!(q.yaw().abs() < EPS);
    }

    #[test]
    fn test_roll_round_trip() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), -0.6);
        assert!((q.roll() + 0.6).abs() < 1e-4);
        assert!(q.pitch().abs() < EPS);
    }

    #[test]
    fn test_north_pole_clamps() {
        let h = 0.5f32.sqrt();
        let q = Quaternion::new(0.1, 0.0, h, h);
        assert!(q.x * q.y + q.z * q.w > SINGULARITY_THRESHOLD);

        assert_eq!(q.pitch(), FRAC_PI_2);
        assert_eq!(q.roll(), 0.0);
        assert_eq!(q.yaw(), 2.0 * q.x.atan2(q.w));
    }

    #[test]
    fn test_south_pole_clamps() {
        let q = Quaternion::new(0.2, 0.0, -0.5f32.sqrt(), 0.5f32.sqrt());
        assert!(q.x * q.y + q.z * q.w < -SINGULARITY_THRESHOLD);

        assert_eq!(q.pitch(), -FRAC_PI_2);
        assert_eq!(q.roll(), 0.0);
        assert_eq!(q.yaw(), -2.0 * q.x.atan2(q.w));
    }

    #[test]
    fn test_euler_angles_bundle() {
        let q = Quaternion::from_axis_angle(&y_axis(), 0.9);
        let ypr: YawPitchRoll = q.into();
        assert_eq!(ypr, q.euler_angles());
        assert!((ypr.yaw - 0.9).abs() < 1e-4);
    }
}
