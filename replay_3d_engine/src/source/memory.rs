/// In-memory frame source.
///
/// The simplest FrameSource: a pre-built sequence of frames plus optional
/// per-frame poses. Used by demos and tests; file-format sources implement
/// the same trait in their own crates.

use crate::error::{Error, Result};
use crate::filter::FilterPipeline;
use crate::frame::{Frame, Pose};
use super::frame_source::FrameSource;

/// FrameSource over a pre-built frame sequence.
pub struct MemorySource {
    frames: Vec<Frame>,
    poses: Vec<Pose>,
}

impl MemorySource {
    /// Create a source with identity poses for every frame.
    pub fn new(frames: Vec<Frame>) -> Self {
        let poses = vec![Pose::IDENTITY; frames.len()];
        Self { frames, poses }
    }

    /// Create a source with one pose per frame.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` if the pose count does not match
    /// the frame count.
    pub fn with_poses(frames: Vec<Frame>, poses: Vec<Pose>) -> Result<Self> {
        if poses.len() != frames.len() {
            return Err(Error::InvariantViolation(format!(
                "poses has {} entries, expected {}",
                poses.len(),
                frames.len()
            )));
        }
        Ok(Self { frames, poses })
    }

    fn check_range(&self, frame_id: usize) -> Result<()> {
        if frame_id >= self.frames.len() {
            return Err(Error::SourceExhausted {
                frame_id,
                frame_count: self.frames.len(),
            });
        }
        Ok(())
    }
}

impl FrameSource for MemorySource {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frame(&mut self, frame_id: usize, filter: Option<&FilterPipeline>) -> Result<Frame> {
        self.check_range(frame_id)?;
        let frame = self.frames[frame_id].clone();

        match filter {
            Some(pipeline) => {
                let (points, meta) = pipeline.apply(frame.points, frame.meta)?;
                Ok(Frame::new(points, meta))
            }
            None => Ok(frame),
        }
    }

    fn pose(&mut self, frame_id: usize) -> Result<Pose> {
        self.check_range(frame_id)?;
        Ok(self.poses[frame_id])
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
