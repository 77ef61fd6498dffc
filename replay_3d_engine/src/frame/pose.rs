/// Rigid sensor pose for one frame.
///
/// Maps sensor-frame points into the world frame: `p' = R * p + T`.
/// Sources report one pose per frame; map building composes them to
/// accumulate a global cloud.

use glam::{Mat3, Vec3};

/// Rotation + translation of the sensor for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Sensor-to-world rotation
    pub rotation: Mat3,

    /// Sensor position in the world frame
    pub translation: Vec3,
}

impl Pose {
    /// Identity pose (sensor frame == world frame).
    pub const IDENTITY: Pose = Pose {
        rotation: Mat3::IDENTITY,
        translation: Vec3::ZERO,
    };

    /// Create a pose from a rotation matrix and a translation vector.
    pub fn new(rotation: Mat3, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Map a sensor-frame point into the world frame.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
