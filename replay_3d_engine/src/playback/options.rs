/// Playback and view options.

use std::time::Duration;

use crate::camera::CameraPose;

/// Options for an animated playback pass.
///
/// The defaults play the whole source at 10 frames per second with a
/// 5-unit reference axes and the auto-fitted camera.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use replay_3d_engine::replay3d::playback::PlayOptions;
///
/// let options = PlayOptions {
///     begin: 10,
///     end: Some(20),
///     delay: Duration::from_millis(50),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// First frame index to display
    pub begin: usize,
    /// One past the last frame index; `None` plays through the source's
    /// last frame
    pub end: Option<usize>,
    /// Minimum time each frame stays on screen
    pub delay: Duration,
    /// Size of the static reference axes; `None` draws no axes
    pub axis: Option<f32>,
    /// Explicit first-frame camera; `None` keeps the auto-fitted view
    pub camera: Option<CameraPose>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            begin: 0,
            end: None,
            delay: Duration::from_millis(100),
            axis: Some(5.0),
            camera: None,
        }
    }
}

/// Options for the static single-frame view.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    /// Size of the reference axes; `None` draws no axes
    pub axis: Option<f32>,
    /// Explicit camera; `None` keeps the auto-fitted view
    pub camera: Option<CameraPose>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            axis: Some(5.0),
            camera: None,
        }
    }
}
