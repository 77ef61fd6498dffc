//! Camera initialization
//!
//! Builds the explicit camera override applied on the first displayed frame:
//! an extrinsic matrix from a roll/pitch/yaw + position pose, and pinhole
//! intrinsics derived from the window size.

mod camera;

pub use camera::{CameraIntrinsics, CameraPose, FOCAL_FRACTION};
