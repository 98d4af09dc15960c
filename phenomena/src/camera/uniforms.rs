use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view_matrix: Mat4,
    pub model_view_projection_matrix: Mat4,
    pub center: Vec3,
    pub dummy0: f32,
    pub view_vector: Vec3,
    pub dummy1: f32,
    pub position: Vec3,
    pub dummy2: f32,
    pub up: Vec3,
    pub dummy3: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 192);
        let uniforms = CameraUniforms::zeroed();
        assert_eq!(bytemuck::bytes_of(&uniforms).len(), 192);
    }
}
