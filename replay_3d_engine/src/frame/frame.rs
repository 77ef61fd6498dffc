/// Frame types for the playback system.
///
/// A Frame is one step of a point-cloud sequence: the point positions plus a
/// FrameMeta bundle of per-point arrays and primitive descriptors. Per-point
/// arrays are index-aligned with the point array; entry `i` describes point
/// `i`. That alignment is the core data invariant of the engine and is
/// re-checked after every fetch and every filter stage.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::scene::{Arrow, BoundingBox, Sphere};

/// Stable identifier attached to a point by the capture pipeline.
pub type PointId = i64;

// ===== FRAME META =====

/// Metadata attached to one frame of points.
///
/// Two kinds of payload live here:
/// - per-point arrays (`colors`, `ids`, named `channels`), which must have
///   exactly one entry per point;
/// - primitive descriptor lists (`boxes`, `arrows`, `spheres`), which are
///   independent of the point count and describe extra geometry to draw
///   alongside the cloud for this frame only.
#[derive(Debug, Clone, Default)]
pub struct FrameMeta {
    /// RGB color per point, components in [0, 1]
    pub colors: Option<Vec<Vec3>>,

    /// Capture id per point
    pub ids: Option<Vec<PointId>>,

    /// Named per-point vector channels (e.g. "velocity")
    pub channels: FxHashMap<String, Vec<Vec3>>,

    /// Oriented bounding boxes to draw with this frame
    pub boxes: Vec<BoundingBox>,

    /// Arrows to draw with this frame
    pub arrows: Vec<Arrow>,

    /// Spheres to draw with this frame
    pub spheres: Vec<Sphere>,
}

impl FrameMeta {
    /// Check that every per-point array lines up with `point_count`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` naming the offending array when
    /// any per-point array has a different length.
    pub fn validate(&self, point_count: usize) -> Result<()> {
        if let Some(colors) = &self.colors {
            if colors.len() != point_count {
                return Err(Error::InvariantViolation(format!(
                    "colors has {} entries, expected {}",
                    colors.len(),
                    point_count
                )));
            }
        }

        if let Some(ids) = &self.ids {
            if ids.len() != point_count {
                return Err(Error::InvariantViolation(format!(
                    "ids has {} entries, expected {}",
                    ids.len(),
                    point_count
                )));
            }
        }

        for (name, channel) in &self.channels {
            if channel.len() != point_count {
                return Err(Error::InvariantViolation(format!(
                    "channel '{}' has {} entries, expected {}",
                    name,
                    channel.len(),
                    point_count
                )));
            }
        }

        Ok(())
    }

    /// Number of primitive descriptors carried by this frame.
    pub fn primitive_count(&self) -> usize {
        self.boxes.len() + self.arrows.len() + self.spheres.len()
    }
}

// ===== FRAME =====

/// One frame of a point-cloud sequence.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Point positions
    pub points: Vec<Vec3>,

    /// Index-aligned metadata and primitive descriptors
    pub meta: FrameMeta,
}

impl Frame {
    /// Create a frame from points and metadata.
    pub fn new(points: Vec<Vec3>, meta: FrameMeta) -> Self {
        Self { points, meta }
    }

    /// Number of points in this frame.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Check the per-point alignment invariant for this frame.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` if any per-point array in the
    /// metadata does not match the point count.
    pub fn validate(&self) -> Result<()> {
        self.meta.validate(self.points.len())
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
