use glam::{Quat, Vec2, Vec3};

use crate::application::Application;
use crate::demo::Demo;
use crate::input::Key;
use crate::render::{DrawList, ShapeInstance, ShapeKind};

/// Degrees added per frame while an arrow key is held.
const ROTATION_STEP: f32 = 0.05;
/// Degrees per pixel of left-button drag.
const DRAG_SENSITIVITY: f32 = 0.05;
/// Spin of the cube ring in degrees per second.
const RING_SPIN: f32 = 20.0;
const SUN_COLOR: Vec3 = Vec3::new(1.0, 0.2, 0.1);
const LIGHT_POSITION: Vec3 = Vec3::new(1.2, 1.0, 2.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Planet {
    pub radius: f32,
    pub speed: f32,
    pub size: f32,
    pub color: Vec3,
}

pub const PLANETS: [Planet; 5] = [
    Planet {
        radius: 3.0,
        speed: 1.5,
        size: 0.4,
        color: Vec3::new(0.2, 0.4, 0.8),
    },
    Planet {
        radius: 5.0,
        speed: 1.0,
        size: 0.6,
        color: Vec3::new(0.8, 0.8, 0.1),
    },
    Planet {
        radius: 7.0,
        speed: 0.7,
        size: 0.5,
        color: Vec3::new(0.1, 0.7, 0.3),
    },
    Planet {
        radius: 9.0,
        speed: 0.5,
        size: 0.7,
        color: Vec3::new(0.7, 0.3, 0.8),
    },
    Planet {
        radius: 11.0,
        speed: 0.3,
        size: 0.3,
        color: Vec3::new(0.9, 0.6, 0.1),
    },
];

impl Planet {
    /// Orbit angle in radians after `time` seconds.
    pub fn angle(&self, time: f32) -> f32 {
        time * self.speed
    }

    pub fn position(&self, time: f32) -> Vec3 {
        let angle = self.angle(time);
        Vec3::new(angle.sin() * self.radius, 0.0, angle.cos() * self.radius)
    }
}

/// A cube turned with the arrow keys or a left-button drag inside a small
/// solar system.
#[derive(Clone, Debug, Default)]
pub struct CubeOrbit {
    /// Rotation about x and y in degrees.
    rotation: Vec2,
}

impl CubeOrbit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn cube_orientation(&self) -> Quat {
        Quat::from_rotation_x(self.rotation.x.to_radians())
            * Quat::from_rotation_y(self.rotation.y.to_radians())
    }

    /// Centers and colors of the eight cubes around the sun.
    pub fn ring() -> impl Iterator<Item = (Vec3, Vec3)> {
        (-1..=1)
            .flat_map(|i| (-1..=1).map(move |j| (i, j)))
            .filter(|&(i, j)| (i, j) != (0, 0))
            .map(|(i, j)| {
                let (i, j) = (i as f32, j as f32);
                (
                    Vec3::new(i * 2.0, -0.5, j * 2.0),
                    Vec3::new(0.2 + i * 0.3, 0.5, 0.2 + j * 0.3).clamp(Vec3::ZERO, Vec3::ONE),
                )
            })
    }
}

impl Demo for CubeOrbit {
    fn title(&self) -> &str {
        "Cube and Orbits"
    }

    fn setup(&mut self, application: &mut Application) {
        let camera = &mut application.camera;
        camera.position = Vec3::new(0.0, 2.0, 5.0);
        camera.fov = 45.0;
        camera.movement_scale = 10.0;
        application.set_mouse_captured(false);
    }

    fn update(&mut self, application: &Application) {
        if application.is_held(Key::Up) {
            self.rotation.x += ROTATION_STEP;
        }
        if application.is_held(Key::Down) {
            self.rotation.x -= ROTATION_STEP;
        }
        if application.is_held(Key::Left) {
            self.rotation.y -= ROTATION_STEP;
        }
        if application.is_held(Key::Right) {
            self.rotation.y += ROTATION_STEP;
        }
        let drag = application.drag() * DRAG_SENSITIVITY;
        self.rotation.y += drag.x;
        self.rotation.x += drag.y;
    }

    fn render(&mut self, application: &Application, draw: &mut DrawList) {
        draw.camera = Some(application.camera.uniforms());
        let time = application.clock.elapsed();

        draw.push(
            ShapeInstance::new(
                ShapeKind::Cube,
                Vec3::new(0.0, 3.0, 0.0),
                Vec3::ONE,
                Vec3::new(1.0, 0.5, 0.31),
            )
            .with_rotation(self.cube_orientation()),
        );

        let spin = Quat::from_axis_angle(
            Vec3::new(0.5, 1.0, 0.0).normalize(),
            (time * RING_SPIN).to_radians(),
        );
        for (center, color) in Self::ring() {
            draw.push(
                ShapeInstance::new(ShapeKind::Cube, center, Vec3::splat(0.5), color)
                    .with_rotation(spin),
            );
        }

        draw.push(ShapeInstance::new(
            ShapeKind::Sphere,
            Vec3::ZERO,
            Vec3::splat(1.5),
            SUN_COLOR,
        ));
        for planet in &PLANETS {
            draw.push(
                ShapeInstance::new(
                    ShapeKind::Sphere,
                    planet.position(time),
                    Vec3::splat(planet.size),
                    planet.color,
                )
                .with_rotation(Quat::from_rotation_y(planet.angle(time))),
            );
        }

        draw.push(ShapeInstance::new(
            ShapeKind::Cube,
            LIGHT_POSITION,
            Vec3::splat(0.2),
            Vec3::ONE,
        ));
    }
}
