use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use phenomena_core::{Billboard, Particle, ParticleSystem};

use crate::camera::FlyCamera;

/// One camera-facing particle quad.
///
/// `right` and `up` are half-extents in world space, already rolled about
/// the view axis, so a vertex shader only needs `center ± right ± up`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BillboardInstance {
    pub center: [f32; 3],
    pub alpha: f32,
    pub right: [f32; 3],
    pub _padding0: f32,
    pub up: [f32; 3],
    pub _padding1: f32,
    pub color: [f32; 4],
}

impl BillboardInstance {
    pub fn new(particle: &Particle, billboard: &Billboard, right: Vec3, up: Vec3) -> Self {
        let (sin, cos) = billboard.roll.sin_cos();
        let rolled_right = right * cos + up * sin;
        let rolled_up = up * cos - right * sin;
        Self {
            center: particle.position.to_array(),
            alpha: billboard.alpha,
            right: (rolled_right * billboard.width * 0.5).to_array(),
            _padding0: 0.0,
            up: (rolled_up * billboard.height * 0.5).to_array(),
            _padding1: 0.0,
            color: particle.color.extend(billboard.alpha).to_array(),
        }
    }

    /// Bottom-left, bottom-right, top-right, top-left.
    pub fn corners(&self) -> [Vec3; 4] {
        let center = Vec3::from_array(self.center);
        let right = Vec3::from_array(self.right);
        let up = Vec3::from_array(self.up);
        [
            center - right - up,
            center + right - up,
            center + right + up,
            center - right + up,
        ]
    }

    pub fn color(&self) -> Vec4 {
        Vec4::from_array(self.color)
    }
}

/// Turns a particle system into billboard instances for the current camera.
#[derive(Debug, Default)]
pub struct ParticleRenderer {
    instances: Vec<BillboardInstance>,
}

impl ParticleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the instance buffer. The previous allocation is reused.
    pub fn prepare(&mut self, system: &ParticleSystem, camera: &FlyCamera) -> &[BillboardInstance] {
        let right = camera.right();
        let up = camera.up();
        self.instances.clear();
        self.instances.extend(
            system
                .billboards()
                .map(|(particle, billboard)| BillboardInstance::new(particle, &billboard, right, up)),
        );
        log::trace!(
            "Prepared {} {} billboards ({} bytes)",
            self.instances.len(),
            system.name(),
            std::mem::size_of_val(self.instances.as_slice())
        );
        &self.instances
    }
}
