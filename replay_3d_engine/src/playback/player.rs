/// Player - animates a frame sequence in a viewer.
///
/// The player owns its viewer exclusively: one window, one render/poll
/// thread, no background prefetch. Fetching frame i+1 never overlaps
/// rendering frame i, and frames appear strictly in increasing index order.

use std::time::Instant;

use glam::Vec3;

use crate::backend::Viewer;
use crate::camera::CameraIntrinsics;
use crate::error::Result;
use crate::filter::FilterPipeline;
use crate::frame::FrameMeta;
use crate::scene::Scene;
use crate::source::FrameSource;
use super::options::{PlayOptions, ViewOptions};

/// Plays frames from a [`FrameSource`] as an interactive animation.
///
/// `play` and `show` consume the player, so the viewer (and its window) is
/// dropped on every exit path, including errors and window close. A second
/// pass needs a fresh player and starts from an empty scene.
///
/// # Example
///
/// ```no_run
/// use replay_3d_engine::replay3d::backend::{create_viewer, DisplayConfig};
/// use replay_3d_engine::replay3d::playback::{PlayOptions, Player};
/// use replay_3d_engine::replay3d::source::MemorySource;
/// # fn main() -> replay_3d_engine::replay3d::Result<()> {
/// let viewer = create_viewer("vulkan", &DisplayConfig::default())?;
/// let mut source = MemorySource::new(vec![]);
/// Player::new(viewer).play(&mut source, None, &PlayOptions::default())?;
/// # Ok(())
/// # }
/// ```
pub struct Player {
    viewer: Box<dyn Viewer>,
}

impl Player {
    /// Create a player around an open viewer
    pub fn new(viewer: Box<dyn Viewer>) -> Self {
        Self { viewer }
    }

    /// Animate frames `begin..end` of `source`.
    ///
    /// Each iteration removes the previous frame's dynamic primitives,
    /// fetches the next frame through `filter`, replaces the persistent
    /// point cloud, adds the frame's primitives without re-fitting the view,
    /// then polls and redraws until `options.delay` has elapsed since the
    /// render pass began. A zero delay still gives every frame one poll and
    /// one redraw. The view is fitted to the scene on the first frame only;
    /// `options.camera` replaces that fit with an explicit pose.
    ///
    /// Closing the window stops playback and returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// Source and viewer errors abort the pass immediately. Frames are never
    /// retried or skipped.
    pub fn play(
        mut self,
        source: &mut dyn FrameSource,
        filter: Option<&FilterPipeline>,
        options: &PlayOptions,
    ) -> Result<()> {
        let end = options.end.unwrap_or_else(|| source.frame_count());
        crate::replay_info!(
            "replay3d::Player",
            "Playing frames {}..{} (delay {:?})",
            options.begin,
            end,
            options.delay
        );

        let mut scene = Scene::new();
        if let Some(size) = options.axis {
            scene.add_axes(self.viewer.as_mut(), size)?;
        }

        let mut camera_initialized = false;
        for frame_id in options.begin..end {
            scene.clear_dynamic(self.viewer.as_mut())?;

            let frame = source.frame(frame_id, filter)?;
            frame.validate()?;

            self.viewer
                .update_point_cloud(&frame.points, frame.meta.colors.as_deref())?;
            scene.add_frame(self.viewer.as_mut(), &frame.meta)?;

            let pass_start = Instant::now();
            if !self.render_pass()? {
                crate::replay_info!(
                    "replay3d::Player",
                    "Window closed at frame {}, playback stopped",
                    frame_id
                );
                return Ok(());
            }

            if !camera_initialized {
                self.viewer.reset_view()?;
                if let Some(pose) = options.camera {
                    let (width, height) = self.viewer.window_size();
                    self.viewer
                        .set_camera(pose.extrinsic(), CameraIntrinsics::for_window(width, height))?;
                }
                camera_initialized = true;
            }

            while pass_start.elapsed() < options.delay {
                if !self.render_pass()? {
                    crate::replay_info!(
                        "replay3d::Player",
                        "Window closed at frame {}, playback stopped",
                        frame_id
                    );
                    return Ok(());
                }
            }

            crate::replay_trace!(
                "replay3d::Player",
                "Frame {} displayed ({} points)",
                frame_id,
                frame.points.len()
            );
        }

        crate::replay_info!(
            "replay3d::Player",
            "Playback finished after {} frames",
            end.saturating_sub(options.begin)
        );
        Ok(())
    }

    /// Display a single frame until the window is closed.
    ///
    /// Primitives and axes go in first so the view fit covers them, then the
    /// point cloud. Blocks polling and redrawing until the user closes the
    /// window.
    ///
    /// # Errors
    ///
    /// Fails if per-point metadata is misaligned or the viewer rejects an
    /// update.
    pub fn show(mut self, points: &[Vec3], meta: &FrameMeta, options: &ViewOptions) -> Result<()> {
        meta.validate(points.len())?;

        let mut scene = Scene::new();
        scene.add_frame(self.viewer.as_mut(), meta)?;
        if let Some(size) = options.axis {
            scene.add_axes(self.viewer.as_mut(), size)?;
        }
        self.viewer.update_point_cloud(points, meta.colors.as_deref())?;

        self.viewer.reset_view()?;
        if let Some(pose) = options.camera {
            let (width, height) = self.viewer.window_size();
            self.viewer
                .set_camera(pose.extrinsic(), CameraIntrinsics::for_window(width, height))?;
        }

        crate::replay_info!(
            "replay3d::Player",
            "Showing {} points, close the window to continue",
            points.len()
        );
        while self.render_pass()? {}
        Ok(())
    }

    /// One poll + redraw cycle. Returns false when the window was closed.
    fn render_pass(&mut self) -> Result<bool> {
        if !self.viewer.poll_events()? {
            return Ok(false);
        }
        self.viewer.redraw()?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod tests;
