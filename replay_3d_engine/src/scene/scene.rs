/// Scene - the set of primitives currently alive in a viewer.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. The point cloud
/// itself is a persistent viewer object and is not tracked here; the scene
/// tracks primitive descriptors so each frame's dynamics can be removed
/// exhaustively before the next frame is shown.

use slotmap::SlotMap;

use crate::backend::Viewer;
use crate::error::Result;
use crate::frame::FrameMeta;
use super::primitive::{Axes, Primitive, PrimitiveKey};

/// Registry of primitives shown alongside the point cloud.
///
/// Primitives are managed via stable keys (PrimitiveKey). Dynamic primitives
/// belong to exactly one displayed frame and are cleared before the next one;
/// the reference axes are static and survive clears.
pub struct Scene {
    /// Primitives stored in a slot map for O(1) insert/remove
    primitives: SlotMap<PrimitiveKey, Primitive>,
    /// Dynamic keys in the order they were added
    live_dynamics: Vec<PrimitiveKey>,
    /// Static reference axes, kept across frame changes
    axes: Option<PrimitiveKey>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            primitives: SlotMap::with_key(),
            live_dynamics: Vec::new(),
            axes: None,
        }
    }

    /// Add the static reference axes.
    ///
    /// The axes survive `clear_dynamic`. Adding them again replaces the
    /// previous axes. Bounds may reset here; the first displayed frame
    /// re-fits the view anyway.
    ///
    /// # Arguments
    ///
    /// * `viewer` - Backend to realize the axes in
    /// * `size` - Length of each axis line
    pub fn add_axes(&mut self, viewer: &mut dyn Viewer, size: f32) -> Result<PrimitiveKey> {
        if let Some(old) = self.axes.take() {
            self.primitives.remove(old);
            viewer.remove_primitive(old)?;
        }

        let primitive = Primitive::Axes(Axes { size });
        let key = self.primitives.insert(primitive);
        if let Err(e) = viewer.add_primitive(key, &primitive, true) {
            self.primitives.remove(key);
            return Err(e);
        }
        self.axes = Some(key);
        Ok(key)
    }

    /// Add one dynamic primitive, removed on the next `clear_dynamic`.
    ///
    /// Dynamics never reset the camera bounds: a glancing detection box at
    /// the edge of the cloud must not re-frame the whole view mid-playback.
    ///
    /// Returns a stable key that remains valid until the primitive is removed.
    pub fn add_dynamic(
        &mut self,
        viewer: &mut dyn Viewer,
        primitive: Primitive,
    ) -> Result<PrimitiveKey> {
        let key = self.primitives.insert(primitive);
        if let Err(e) = viewer.add_primitive(key, &primitive, false) {
            self.primitives.remove(key);
            return Err(e);
        }
        self.live_dynamics.push(key);
        Ok(key)
    }

    /// Add every primitive a frame's metadata carries.
    ///
    /// Order is fixed: boxes, then arrows, then spheres. Returns the number
    /// of primitives added.
    pub fn add_frame(&mut self, viewer: &mut dyn Viewer, meta: &FrameMeta) -> Result<usize> {
        let mut added = 0;

        for bounding_box in &meta.boxes {
            self.add_dynamic(viewer, Primitive::BoundingBox(*bounding_box))?;
            added += 1;
        }
        for arrow in &meta.arrows {
            self.add_dynamic(viewer, Primitive::Arrow(*arrow))?;
            added += 1;
        }
        for sphere in &meta.spheres {
            self.add_dynamic(viewer, Primitive::Sphere(*sphere))?;
            added += 1;
        }

        Ok(added)
    }

    /// Remove every live dynamic primitive, in the order they were added.
    ///
    /// Idempotent: calling on a scene with no dynamics is a no-op. The static
    /// axes are not touched. Returns the number of primitives removed.
    pub fn clear_dynamic(&mut self, viewer: &mut dyn Viewer) -> Result<usize> {
        let keys: Vec<PrimitiveKey> = self.live_dynamics.drain(..).collect();
        for key in &keys {
            self.primitives.remove(*key);
            viewer.remove_primitive(*key)?;
        }
        Ok(keys.len())
    }

    /// Get a primitive by key
    pub fn primitive(&self, key: PrimitiveKey) -> Option<&Primitive> {
        self.primitives.get(key)
    }

    /// Number of live dynamic primitives
    pub fn dynamic_count(&self) -> usize {
        self.live_dynamics.len()
    }

    /// Total primitives alive, including the static axes
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Key of the static axes, if added
    pub fn axes_key(&self) -> Option<PrimitiveKey> {
        self.axes
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
