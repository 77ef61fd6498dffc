//! Scene management module
//!
//! Provides primitive descriptors and the live-primitive registry that keeps
//! per-frame dynamics in lockstep with the viewer backend.

mod primitive;
mod scene;

pub use primitive::{Arrow, Axes, BoundingBox, Primitive, PrimitiveKey, Sphere};
pub use scene::Scene;
