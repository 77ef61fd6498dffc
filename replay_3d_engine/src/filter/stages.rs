/// Stock filter stages.
///
/// Noise stages draw from a seeded SmallRng behind a Mutex so a stage can be
/// shared (FilterStage takes `&self`) while staying deterministic under
/// `with_seed`.

use std::sync::Mutex;

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::frame::{FrameMeta, PointId};
use super::pipeline::FilterStage;

fn normal(sigma: f32) -> Result<Normal<f32>> {
    Normal::new(0.0, sigma)
        .map_err(|e| Error::InvariantViolation(format!("invalid noise sigma {}: {}", sigma, e)))
}

fn filter_by_mask<T: Copy>(values: &[T], keep: &[bool]) -> Vec<T> {
    values
        .iter()
        .zip(keep)
        .filter_map(|(value, keep)| keep.then_some(*value))
        .collect()
}

// ===== RADIAL NOISE =====

/// Gaussian jitter on each point's ray length.
///
/// Every point moves along its ray from the origin by Normal(0, sigma),
/// which models per-return range noise of a spinning sensor. Points at the
/// origin have no ray direction and stay put.
pub struct RadialNoise {
    sigma: f32,
    rng: Mutex<SmallRng>,
}

impl RadialNoise {
    pub fn new(sigma: f32) -> Self {
        Self {
            sigma,
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }

    /// Deterministic variant for reproducible sequences.
    pub fn with_seed(sigma: f32, seed: u64) -> Self {
        Self {
            sigma,
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl FilterStage for RadialNoise {
    fn apply(&self, mut points: Vec<Vec3>, meta: FrameMeta) -> Result<(Vec<Vec3>, FrameMeta)> {
        let normal = normal(self.sigma)?;
        let mut rng = self.rng.lock().unwrap();

        for point in &mut points {
            let range = point.length();
            if range > f32::EPSILON {
                let noise: f32 = normal.sample(&mut *rng);
                *point *= (range + noise) / range;
            }
        }

        Ok((points, meta))
    }
}

// ===== CHANNEL NOISE =====

/// Gaussian noise on a named per-point channel (componentwise).
pub struct ChannelNoise {
    channel: String,
    sigma: f32,
    rng: Mutex<SmallRng>,
}

impl ChannelNoise {
    pub fn new(channel: impl Into<String>, sigma: f32) -> Self {
        Self {
            channel: channel.into(),
            sigma,
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }

    /// Deterministic variant for reproducible sequences.
    pub fn with_seed(channel: impl Into<String>, sigma: f32, seed: u64) -> Self {
        Self {
            channel: channel.into(),
            sigma,
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl FilterStage for ChannelNoise {
    fn apply(&self, points: Vec<Vec3>, mut meta: FrameMeta) -> Result<(Vec<Vec3>, FrameMeta)> {
        let normal = normal(self.sigma)?;

        let values = meta.channels.get_mut(&self.channel).ok_or_else(|| {
            Error::InvariantViolation(format!("channel '{}' not present", self.channel))
        })?;

        let mut rng = self.rng.lock().unwrap();
        for value in values.iter_mut() {
            value.x += normal.sample(&mut *rng);
            value.y += normal.sample(&mut *rng);
            value.z += normal.sample(&mut *rng);
        }

        Ok((points, meta))
    }
}

// ===== REMOVE BY IDS =====

/// Drop every point whose id is in the list.
///
/// All per-point arrays (colors, ids, channels) are filtered with the same
/// mask so the alignment invariant holds afterwards. Primitive descriptor
/// lists are untouched.
pub struct RemoveByIds {
    ids: FxHashSet<PointId>,
}

impl RemoveByIds {
    pub fn new<I: IntoIterator<Item = PointId>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

impl FilterStage for RemoveByIds {
    fn apply(&self, points: Vec<Vec3>, meta: FrameMeta) -> Result<(Vec<Vec3>, FrameMeta)> {
        let FrameMeta {
            colors,
            ids,
            mut channels,
            boxes,
            arrows,
            spheres,
        } = meta;

        let point_ids = ids.ok_or_else(|| {
            Error::InvariantViolation("point ids required to remove by id".to_string())
        })?;

        if point_ids.len() != points.len() {
            return Err(Error::InvariantViolation(format!(
                "ids has {} entries, expected {}",
                point_ids.len(),
                points.len()
            )));
        }

        let keep: Vec<bool> = point_ids.iter().map(|id| !self.ids.contains(id)).collect();

        let points = filter_by_mask(&points, &keep);
        let colors = colors.map(|colors| filter_by_mask(&colors, &keep));
        let point_ids = filter_by_mask(&point_ids, &keep);
        for values in channels.values_mut() {
            *values = filter_by_mask(values, &keep);
        }

        Ok((
            points,
            FrameMeta {
                colors,
                ids: Some(point_ids),
                channels,
                boxes,
                arrows,
                spheres,
            },
        ))
    }
}

// ===== SWAP CHANNEL =====

/// Swap point positions with a named per-point channel.
///
/// Displays the cloud in that channel's space (e.g. velocity space) while
/// the previous positions stay available under the same channel name, so
/// applying the stage twice restores the original frame.
pub struct SwapChannel {
    channel: String,
}

impl SwapChannel {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl FilterStage for SwapChannel {
    fn apply(&self, mut points: Vec<Vec3>, mut meta: FrameMeta) -> Result<(Vec<Vec3>, FrameMeta)> {
        let stored = meta.channels.get_mut(&self.channel).ok_or_else(|| {
            Error::InvariantViolation(format!("channel '{}' not present", self.channel))
        })?;

        std::mem::swap(stored, &mut points);

        Ok((points, meta))
    }
}

#[cfg(test)]
#[path = "stages_tests.rs"]
mod tests;
