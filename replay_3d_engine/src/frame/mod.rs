//! Frame data model
//!
//! Provides the per-frame point payload (points plus index-aligned metadata),
//! the primitive descriptor lists carried with it, and rigid sensor poses.

mod frame;
mod pose;

pub use frame::{Frame, FrameMeta, PointId};
pub use pose::Pose;
