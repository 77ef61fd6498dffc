/// Frame filtering strategies.
///
/// A FilterStage transforms one frame's points and metadata on its way from
/// the source to the display. Stages compose by ordered application in a
/// FilterPipeline rather than by any kind of hierarchy: each stage is a
/// plain function from (points, meta) to (points, meta).

use glam::Vec3;

use crate::error::{Error, Result};
use crate::frame::FrameMeta;

/// Strategy for transforming one frame during a fetch.
///
/// Sources call the pipeline once per fetched frame, before the frame
/// reaches the player. Stages take the payload by value and return the
/// transformed payload; a stage that drops points must drop the matching
/// entries of every per-point array too, since the pipeline re-checks the
/// alignment invariant after every stage.
///
/// `&self` keeps stages shareable; stateful stages (seeded noise) hide
/// their state behind interior mutability.
pub trait FilterStage: Send + Sync {
    /// Transform one frame's points and metadata.
    fn apply(&self, points: Vec<Vec3>, meta: FrameMeta) -> Result<(Vec<Vec3>, FrameMeta)>;
}

/// Plain functions and closures are stages.
impl<F> FilterStage for F
where
    F: Fn(Vec<Vec3>, FrameMeta) -> Result<(Vec<Vec3>, FrameMeta)> + Send + Sync,
{
    fn apply(&self, points: Vec<Vec3>, meta: FrameMeta) -> Result<(Vec<Vec3>, FrameMeta)> {
        self(points, meta)
    }
}

/// Ordered sequence of filter stages.
///
/// `apply` runs stages left to right and re-validates the per-point
/// alignment invariant after each one, so a misbehaving stage is reported
/// by index instead of silently rendering misaligned data.
pub struct FilterPipeline {
    stages: Vec<Box<dyn FilterStage>>,
}

impl FilterPipeline {
    /// Create an empty pipeline (passthrough).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage, builder style.
    pub fn with_stage<S: FilterStage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Append a stage.
    pub fn push<S: FilterStage + 'static>(&mut self, stage: S) {
        self.stages.push(Box::new(stage));
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True when the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage over one frame's payload.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` if the input payload is already
    /// misaligned, or naming the stage index if a stage breaks the
    /// alignment. Stage errors propagate as-is.
    pub fn apply(
        &self,
        mut points: Vec<Vec3>,
        mut meta: FrameMeta,
    ) -> Result<(Vec<Vec3>, FrameMeta)> {
        meta.validate(points.len())?;

        for (index, stage) in self.stages.iter().enumerate() {
            let (next_points, next_meta) = stage.apply(points, meta)?;
            points = next_points;
            meta = next_meta;

            meta.validate(points.len()).map_err(|e| match e {
                Error::InvariantViolation(msg) => {
                    Error::InvariantViolation(format!("filter stage {}: {}", index, msg))
                }
                other => other,
            })?;
        }

        Ok((points, meta))
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
