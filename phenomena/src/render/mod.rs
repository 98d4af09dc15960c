//! GPU-ready draw data produced by the demos each frame.
//!
//! Nothing here talks to a graphics API. A [`DrawList`] is a plain
//! collection of `Pod` instance records that can be uploaded as-is with
//! [`bytemuck::cast_slice`].

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec2, Vec3};

use crate::camera::CameraUniforms;

pub mod particles;

pub use particles::{BillboardInstance, ParticleRenderer};

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Unit square in the xy plane centred on the origin.
    Quad = 0,
    /// Unit-diameter disc in the xy plane.
    Circle = 1,
    Cube = 2,
    Sphere = 3,
}

impl ShapeKind {
    pub fn from_u32(value: u32) -> Option<ShapeKind> {
        match value {
            0 => Some(ShapeKind::Quad),
            1 => Some(ShapeKind::Circle),
            2 => Some(ShapeKind::Cube),
            3 => Some(ShapeKind::Sphere),
            _ => None,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    pub translation: [f32; 3],
    pub kind: u32,
    pub scale: [f32; 3],
    pub _padding: f32,
    pub rotation: [f32; 4],
    pub color: [f32; 4],
}

impl ShapeInstance {
    pub fn new(kind: ShapeKind, translation: Vec3, scale: Vec3, color: Vec3) -> Self {
        Self {
            translation: translation.to_array(),
            kind: kind as u32,
            scale: scale.to_array(),
            _padding: 0.0,
            rotation: Quat::IDENTITY.to_array(),
            color: color.extend(1.0).to_array(),
        }
    }

    /// Screen-space rectangle for the 2D demos.
    pub fn rect(center: Vec2, size: Vec2, color: Vec3) -> Self {
        Self::new(ShapeKind::Quad, center.extend(0.0), size.extend(1.0), color)
    }

    /// Screen-space ellipse for the 2D demos.
    pub fn ellipse(center: Vec2, size: Vec2, color: Vec3) -> Self {
        Self::new(ShapeKind::Circle, center.extend(0.0), size.extend(1.0), color)
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation.to_array();
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color[3] = alpha;
        self
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        ShapeKind::from_u32(self.kind)
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.translation)
    }

    pub fn scale(&self) -> Vec3 {
        Vec3::from_array(self.scale)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale(),
            Quat::from_array(self.rotation),
            self.translation(),
        )
    }
}

/// Everything one frame wants drawn.
///
/// `camera` is `None` for the 2D demos, whose shapes live directly in
/// normalized device coordinates.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub camera: Option<CameraUniforms>,
    pub shapes: Vec<ShapeInstance>,
    pub billboards: Vec<BillboardInstance>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.camera = None;
        self.shapes.clear();
        self.billboards.clear();
    }

    pub fn push(&mut self, shape: ShapeInstance) {
        self.shapes.push(shape);
    }

    pub fn extend_billboards(&mut self, billboards: &[BillboardInstance]) {
        self.billboards.extend_from_slice(billboards);
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.shapes
            .iter()
            .filter(|shape| shape.kind() == Some(kind))
            .count()
    }

    pub fn shape_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.shapes)
    }

    pub fn billboard_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.billboards)
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.billboards.is_empty()
    }
}
