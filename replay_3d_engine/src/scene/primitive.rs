/// Primitive descriptor types for the scene system.
///
/// A Primitive is a backend-agnostic description of extra geometry drawn
/// alongside the point cloud: detection boxes, direction arrows, highlight
/// spheres, and the static reference axes. Filters and sources produce
/// descriptors; backends turn them into whatever mesh representation they
/// need.

use glam::{Mat3, Vec3};
use slotmap::new_key_type;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a Primitive within a Scene.
    ///
    /// Keys remain valid even after other primitives are removed.
    /// A key becomes invalid only when its own primitive is removed.
    pub struct PrimitiveKey;
}

// ===== DESCRIPTORS =====

/// Oriented bounding box descriptor
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Box center
    pub center: Vec3,
    /// Full edge lengths along the box axes
    pub extent: Vec3,
    /// Box orientation
    pub rotation: Mat3,
    /// RGB color, components in [0, 1]
    pub color: Vec3,
}

/// Arrow descriptor from `begin` to `end`
#[derive(Debug, Clone, Copy)]
pub struct Arrow {
    /// Arrow tail
    pub begin: Vec3,
    /// Arrow head
    pub end: Vec3,
    /// RGB color, components in [0, 1]
    pub color: Vec3,
}

/// Sphere descriptor
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Sphere center
    pub center: Vec3,
    /// Sphere radius
    pub radius: f32,
    /// RGB color, components in [0, 1]
    pub color: Vec3,
}

/// Reference axes descriptor, placed at the origin
#[derive(Debug, Clone, Copy)]
pub struct Axes {
    /// Length of each axis line
    pub size: f32,
}

/// Backend-agnostic primitive descriptor
#[derive(Debug, Clone, Copy)]
pub enum Primitive {
    BoundingBox(BoundingBox),
    Arrow(Arrow),
    Sphere(Sphere),
    Axes(Axes),
}

impl Primitive {
    /// Short name of the primitive kind (for logs and tests).
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::BoundingBox(_) => "bounding_box",
            Primitive::Arrow(_) => "arrow",
            Primitive::Sphere(_) => "sphere",
            Primitive::Axes(_) => "axes",
        }
    }
}

impl From<BoundingBox> for Primitive {
    fn from(value: BoundingBox) -> Self {
        Primitive::BoundingBox(value)
    }
}

impl From<Arrow> for Primitive {
    fn from(value: Arrow) -> Self {
        Primitive::Arrow(value)
    }
}

impl From<Sphere> for Primitive {
    fn from(value: Sphere) -> Self {
        Primitive::Sphere(value)
    }
}

impl From<Axes> for Primitive {
    fn from(value: Axes) -> Self {
        Primitive::Axes(value)
    }
}
