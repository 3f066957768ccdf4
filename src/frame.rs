//! Sensor-to-body frame transforms applied to orientation before heading
//! extraction.
//!
//! Which transform applies depends on the sensor mounting and on the
//! convention of the upstream fusion filter. It is selected in config.

use serde::{Deserialize, Serialize};

use crate::quaternion::Quaternion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameTransform {
    /// Swap x and y and negate the vector part: `(x, y, z, w) -> (-y, -x, -z, w)`.
    #[default]
    ReflectToProper,
    /// Use the orientation as reported.
    Identity,
}

impl FrameTransform {
    pub fn apply(&self, q: &Quaternion) -> Quaternion {
        match self {
            FrameTransform::ReflectToProper => Quaternion::new(-q.y, -q.x, -q.z, q.w),
            FrameTransform::Identity => *q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3;

    #[test]
    fn test_reflect_to_proper_components() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        let r = FrameTransform::ReflectToProper.apply(&q);
        assert!(r.equals(&Quaternion::new(-0.2, -0.1, -0.3, 0.9)));
    }

    #[test]
    fn test_identity_transform() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        assert!(FrameTransform::Identity.apply(&q).equals(&q));
    }

    #[test]
    fn test_reflect_maps_roll_about_x_to_negative_yaw() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 0.0, 0.0), 0.5);
        let yaw = FrameTransform::ReflectToProper.apply(&q).yaw();
        assert!((yaw + 0.5).abs() < 1e-5, "yaw was {}", yaw);
    }

    #[test]
    fn test_identity_orientation_has_zero_heading() {
        let q = FrameTransform::ReflectToProper.apply(&Quaternion::identity());
        assert_eq!(q.yaw(), 0.0);
    }
}
