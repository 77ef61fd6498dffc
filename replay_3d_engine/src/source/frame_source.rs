/// FrameSource trait - sequential access to a recorded point-cloud sequence

use crate::error::Result;
use crate::filter::FilterPipeline;
use crate::frame::{Frame, Pose};

/// Sequential access to a recorded frame sequence.
///
/// A source owns the decoding of one sequence; the player only ever asks for
/// a frame by index. Filtering happens inside the fetch, once per frame, so
/// every consumer of the returned frame sees the same filtered payload.
///
/// `&mut self` allows caching implementations to maintain state across
/// fetches.
pub trait FrameSource {
    /// Total number of frames in the sequence.
    fn frame_count(&self) -> usize;

    /// Fetch frame `frame_id`, applying `filter` to the payload if given.
    ///
    /// # Arguments
    ///
    /// * `frame_id` - Zero-based frame index
    /// * `filter` - Pipeline to run over the payload before returning it
    ///
    /// # Errors
    ///
    /// Returns `Error::SourceExhausted` when `frame_id` is out of range;
    /// decode and filter errors propagate unchanged.
    fn frame(&mut self, frame_id: usize, filter: Option<&FilterPipeline>) -> Result<Frame>;

    /// Sensor pose for frame `frame_id` (maps its points into the world frame).
    ///
    /// # Errors
    ///
    /// Returns `Error::SourceExhausted` when `frame_id` is out of range.
    fn pose(&mut self, frame_id: usize) -> Result<Pose>;
}
