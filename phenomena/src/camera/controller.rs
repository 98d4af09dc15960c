use std::collections::HashSet;

use glam::{Mat4, Vec3};

use crate::camera::uniforms::CameraUniforms;
use crate::input::Key;

/// First-person camera steered with WASD, space/control and the mouse.
#[derive(Clone, Debug)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Degrees. -90 looks down the negative z axis.
    pub yaw: f32,
    /// Degrees, kept within `±max_pitch`.
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    /// Multiplier applied to `speed * dt` when moving.
    pub movement_scale: f32,
    pub max_pitch: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Speed change per scroll notch.
    pub scroll_step: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: -90.0,
            pitch: 0.0,
            speed: 0.05,
            sensitivity: 0.1,
            movement_scale: 100.0,
            max_pitch: 89.0,
            min_speed: 0.01,
            max_speed: 0.2,
            scroll_step: 0.01,
            fov: 60.0,
            aspect_ratio: 4.0 / 3.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl FlyCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.front()).normalize()
    }

    /// Turns the camera by a pointer offset in pixels.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-self.max_pitch, self.max_pitch);
    }

    pub fn scroll(&mut self, notches: f32) {
        self.speed = (self.speed + notches * self.scroll_step).clamp(self.min_speed, self.max_speed);
    }

    /// Moves along the view direction, the horizontal right axis and world up
    /// according to the held keys.
    pub fn process_keys(&mut self, held: &HashSet<Key>, dt: f32) {
        let distance = self.speed * dt * self.movement_scale;
        let front = self.front();
        let right = self.right();
        let mut offset = Vec3::ZERO;
        for key in held {
            offset += match key {
                Key::W => front,
                Key::S => -front,
                Key::A => -right,
                Key::D => right,
                Key::Space => Vec3::Y,
                Key::LeftControl => -Vec3::Y,
                _ => Vec3::ZERO,
            };
        }
        self.position += offset * distance;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect_ratio, self.near, self.far)
    }

    pub fn uniforms(&self) -> CameraUniforms {
        let view_matrix = self.view_matrix();
        let front = self.front();
        CameraUniforms {
            view_matrix,
            model_view_projection_matrix: self.projection_matrix() * view_matrix,
            center: self.position + front,
            dummy0: 0.0,
            view_vector: front,
            dummy1: 0.0,
            position: self.position,
            dummy2: 0.0,
            up: self.up(),
            dummy3: 0.0,
        }
    }
}
