/// Camera pose and pinhole intrinsics for the first-frame view override.
///
/// By default the viewer auto-fits its camera to the scene bounds on the
/// first displayed frame. Supplying a CameraPose replaces that fit with an
/// explicit extrinsic + intrinsics pair, computed here. The override happens
/// exactly once per playback; all later frames keep whatever view the user
/// has navigated to.

use glam::{EulerRot, Mat3, Mat4, Vec3};

/// Fixed focal length as a fraction of the window width.
///
/// Both focal lengths derive from the width so pixels stay square. The
/// fraction is part of the display convention, not a tunable.
pub const FOCAL_FRACTION: f32 = 0.5;

// ===== CAMERA POSE =====

/// Explicit camera placement: orientation in degrees plus position.
///
/// The extrinsic translation swaps the first two position components,
/// (x, y, z) -> (y, x, z). The capture convention for these sequences
/// disagrees with the display convention about which horizontal axis comes
/// first, and the swap keeps recorded camera poses valid. Callers position
/// the camera in capture coordinates and never see the swap.
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    /// Roll, pitch, yaw in degrees
    pub rpy_deg: Vec3,
    /// Camera position (x, y, z) in capture coordinates
    pub position: Vec3,
}

impl CameraPose {
    /// Create a pose from roll/pitch/yaw angles (degrees) and a position.
    pub fn new(roll: f32, pitch: f32, yaw: f32, x: f32, y: f32, z: f32) -> Self {
        Self {
            rpy_deg: Vec3::new(roll, pitch, yaw),
            position: Vec3::new(x, y, z),
        }
    }

    /// Build the 4x4 extrinsic matrix for this pose.
    ///
    /// Rotation applies yaw about Z, then pitch about Y, then roll about X
    /// (`Rz * Ry * Rx`). The translation column carries the swapped position
    /// `(y, x, z)`.
    pub fn extrinsic(&self) -> Mat4 {
        let roll = self.rpy_deg.x.to_radians();
        let pitch = self.rpy_deg.y.to_radians();
        let yaw = self.rpy_deg.z.to_radians();

        let rotation = Mat3::from_euler(EulerRot::ZYX, yaw, pitch, roll);
        let translation = Vec3::new(self.position.y, self.position.x, self.position.z);

        let mut extrinsic = Mat4::from_mat3(rotation);
        extrinsic.w_axis = translation.extend(1.0);
        extrinsic
    }
}

// ===== CAMERA INTRINSICS =====

/// Pinhole intrinsics derived from the window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Horizontal focal length in pixels
    pub fx: f32,
    /// Vertical focal length in pixels
    pub fy: f32,
    /// Principal point x (window center)
    pub cx: f32,
    /// Principal point y (window center)
    pub cy: f32,
}

impl CameraIntrinsics {
    /// Derive intrinsics for a window.
    ///
    /// `fx == fy == width * FOCAL_FRACTION`; the principal point is the
    /// window center.
    pub fn for_window(width: u32, height: u32) -> Self {
        let focal = width as f32 * FOCAL_FRACTION;
        Self {
            width,
            height,
            fx: focal,
            fy: focal,
            cx: width as f32 / 2.0,
            cy: height as f32 / 2.0,
        }
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
