/// Mock Viewer for unit tests (no window or GPU required)
///
/// Records every trait call as a ViewerOp so tests can assert call order,
/// and plays back scripted poll_events results to simulate the user closing
/// the window mid-playback. The op log is shared behind an Arc because a
/// Player consumes its viewer; tests keep a handle from `ops_handle()`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use glam::{Mat4, Vec3};

use crate::camera::CameraIntrinsics;
use crate::error::Result;
use crate::scene::{Primitive, PrimitiveKey};
use super::viewer::Viewer;

/// One recorded Viewer call
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerOp {
    UpdatePointCloud {
        point_count: usize,
        with_colors: bool,
    },
    AddPrimitive {
        key: PrimitiveKey,
        kind: &'static str,
        reset_bounds: bool,
    },
    RemovePrimitive {
        key: PrimitiveKey,
    },
    PollEvents,
    Redraw,
    ResetView,
    SetCamera {
        extrinsic: Mat4,
        intrinsics: CameraIntrinsics,
    },
}

impl ViewerOp {
    /// True for ops that mutate what is shown (not polls/redraws).
    pub fn is_scene_mutation(&self) -> bool {
        matches!(
            self,
            ViewerOp::UpdatePointCloud { .. }
                | ViewerOp::AddPrimitive { .. }
                | ViewerOp::RemovePrimitive { .. }
        )
    }
}

/// Recording viewer with scripted event polling.
///
/// `poll_events` pops the front of `poll_results`; once the script is
/// exhausted it keeps returning `true` (window stays open).
pub struct MockViewer {
    ops: Arc<Mutex<Vec<ViewerOp>>>,
    poll_results: VecDeque<bool>,
    /// Reported window size
    pub size: (u32, u32),
}

impl MockViewer {
    pub fn new() -> Self {
        Self {
            ops: Arc::new(Mutex::new(Vec::new())),
            poll_results: VecDeque::new(),
            size: (1280, 720),
        }
    }

    /// Script the next poll_events results (front first).
    pub fn with_poll_results(mut self, results: &[bool]) -> Self {
        self.poll_results = results.iter().copied().collect();
        self
    }

    /// Shared handle to the op log, valid after the viewer is consumed.
    pub fn ops_handle(&self) -> Arc<Mutex<Vec<ViewerOp>>> {
        self.ops.clone()
    }

    /// Snapshot of every recorded op, in call order.
    pub fn ops(&self) -> Vec<ViewerOp> {
        self.ops.lock().unwrap().clone()
    }

    fn record(&self, op: ViewerOp) {
        self.ops.lock().unwrap().push(op);
    }
}

/// Point counts of every point-cloud update in an op log, in order.
pub fn update_point_counts(ops: &[ViewerOp]) -> Vec<usize> {
    ops.iter()
        .filter_map(|op| match op {
            ViewerOp::UpdatePointCloud { point_count, .. } => Some(*point_count),
            _ => None,
        })
        .collect()
}

impl Viewer for MockViewer {
    fn update_point_cloud(&mut self, points: &[Vec3], colors: Option<&[Vec3]>) -> Result<()> {
        self.record(ViewerOp::UpdatePointCloud {
            point_count: points.len(),
            with_colors: colors.is_some(),
        });
        Ok(())
    }

    fn add_primitive(
        &mut self,
        key: PrimitiveKey,
        primitive: &Primitive,
        reset_bounds: bool,
    ) -> Result<()> {
        self.record(ViewerOp::AddPrimitive {
            key,
            kind: primitive.kind(),
            reset_bounds,
        });
        Ok(())
    }

    fn remove_primitive(&mut self, key: PrimitiveKey) -> Result<()> {
        self.record(ViewerOp::RemovePrimitive { key });
        Ok(())
    }

    fn poll_events(&mut self) -> Result<bool> {
        self.record(ViewerOp::PollEvents);
        Ok(self.poll_results.pop_front().unwrap_or(true))
    }

    fn redraw(&mut self) -> Result<()> {
        self.record(ViewerOp::Redraw);
        Ok(())
    }

    fn reset_view(&mut self) -> Result<()> {
        self.record(ViewerOp::ResetView);
        Ok(())
    }

    fn set_camera(&mut self, extrinsic: Mat4, intrinsics: CameraIntrinsics) -> Result<()> {
        self.record(ViewerOp::SetCamera {
            extrinsic,
            intrinsics,
        });
        Ok(())
    }

    fn window_size(&self) -> (u32, u32) {
        self.size
    }
}
