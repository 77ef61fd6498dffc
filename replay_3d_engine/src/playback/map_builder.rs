/// Global map accumulation.
///
/// Folds every `step`-th frame of a source into one world-frame point set.
/// Frames are fetched raw (no filter pipeline) and each point is moved
/// through the frame's pose. Large sequences take a while, so progress is
/// reported on a console bar.

use glam::Vec3;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::source::FrameSource;

/// Accumulate frames `0, step, 2*step, ...` into a single point set.
///
/// Returns the concatenated world-frame points; render them with
/// [`Player::show`](super::Player::show) for a static global-map view.
///
/// # Errors
///
/// `step == 0` never advances and is rejected. Source errors propagate.
///
/// # Example
///
/// ```no_run
/// use replay_3d_engine::replay3d::playback::build_map;
/// use replay_3d_engine::replay3d::source::MemorySource;
/// # fn main() -> replay_3d_engine::replay3d::Result<()> {
/// let mut source = MemorySource::new(vec![]);
/// let map_points = build_map(&mut source, 10)?;
/// # Ok(())
/// # }
/// ```
pub fn build_map(source: &mut dyn FrameSource, step: usize) -> Result<Vec<Vec3>> {
    if step == 0 {
        return Err(Error::InvariantViolation(
            "map accumulation step must be at least 1".to_string(),
        ));
    }

    let frame_count = source.frame_count();
    let sampled = frame_count.div_ceil(step);

    let pb = ProgressBar::new(sampled as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} frames ({percent}%) {msg}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb.set_message("Accumulating map");

    let mut map_points = Vec::new();
    for frame_id in (0..frame_count).step_by(step) {
        let frame = source.frame(frame_id, None)?;
        let pose = source.pose(frame_id)?;
        map_points.extend(frame.points.iter().map(|point| pose.transform_point(*point)));
        pb.inc(1);
    }
    pb.finish_with_message("Map accumulated");

    crate::replay_info!(
        "replay3d::MapBuilder",
        "Global map holds {} points from {} frames",
        map_points.len(),
        sampled
    );
    Ok(map_points)
}

#[cfg(test)]
#[path = "map_builder_tests.rs"]
mod tests;
