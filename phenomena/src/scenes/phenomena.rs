use glam::{Quat, Vec3};
use itertools::Itertools;
use phenomena_core::emitters::default_emitter;
use phenomena_core::{EmitterKind, Error, ParticleSystem, SimRng};
use rand::SeedableRng;

use crate::application::Application;
use crate::demo::Demo;
use crate::input::Key;
use crate::render::{DrawList, ParticleRenderer, ShapeInstance, ShapeKind};

const GROUND_COLOR: Vec3 = Vec3::new(0.2, 0.5, 0.2);
const SKY_TOP_COLOR: Vec3 = Vec3::new(0.3, 0.5, 0.9);
const SKY_HORIZON_COLOR: Vec3 = Vec3::new(0.7, 0.8, 1.0);
const SUN_COLOR: Vec3 = Vec3::new(1.0, 0.9, 0.7);
const CLOUDS: usize = 7;
const POT_COLOR: Vec3 = Vec3::new(0.3, 0.15, 0.05);
const SPOUT_COLOR: Vec3 = Vec3::new(0.4, 0.2, 0.1);

/// Five particle systems of which one is shown at a time, picked with the
/// digit keys.
pub struct PhenomenaScene {
    systems: Vec<ParticleSystem>,
    current: EmitterKind,
    show_help: bool,
    help_logged: bool,
    renderer: ParticleRenderer,
}

impl PhenomenaScene {
    pub fn new() -> Result<Self, Error> {
        let systems = EmitterKind::ALL
            .iter()
            .map(|kind| ParticleSystem::new(default_emitter(*kind)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_systems(systems))
    }

    /// Reproducible scene, each system seeded from `seed`.
    pub fn with_seed(seed: u64) -> Result<Self, Error> {
        let systems = EmitterKind::ALL
            .iter()
            .map(|kind| {
                let rng = SimRng::seed_from_u64(seed.wrapping_add(kind.index() as u64));
                ParticleSystem::with_rng(default_emitter(*kind), rng)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_systems(systems))
    }

    fn from_systems(systems: Vec<ParticleSystem>) -> Self {
        let mut scene = Self {
            systems,
            current: EmitterKind::Rain,
            show_help: true,
            help_logged: false,
            renderer: ParticleRenderer::new(),
        };
        scene.select(EmitterKind::Rain);
        scene
    }

    pub fn select(&mut self, kind: EmitterKind) {
        for system in &mut self.systems {
            let active = system.emitter().kind() == kind;
            system.set_active(active);
        }
        if self.current != kind {
            log::info!("Switched to {}", kind.description());
        }
        self.current = kind;
    }

    pub fn current(&self) -> EmitterKind {
        self.current
    }

    pub fn system(&self, kind: EmitterKind) -> &ParticleSystem {
        &self.systems[kind.index()]
    }

    pub fn current_system(&self) -> &ParticleSystem {
        self.system(self.current)
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn help_text() -> String {
        let systems = EmitterKind::ALL
            .iter()
            .enumerate()
            .map(|(index, kind)| format!("  {} - {}", index + 1, kind.description()))
            .join("\n");
        format!(
            "=== CONTROLS ===\n\
             WASD - Move camera\n\
             SPACE/CTRL - Move up/down\n\
             Mouse - Look around\n\
             F1 - Toggle mouse capture\n\
             H - Toggle help display\n\
             1-5 - Switch particle systems:\n\
             {systems}\n\
             ESC - Exit"
        )
    }

    fn render_ground(draw: &mut DrawList) {
        let flat = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);
        draw.push(
            ShapeInstance::new(
                ShapeKind::Quad,
                Vec3::new(0.0, -1.0, 0.0),
                Vec3::new(40.0, 40.0, 1.0),
                GROUND_COLOR,
            )
            .with_rotation(flat),
        );
        let hill_color = (GROUND_COLOR * 1.2).clamp(Vec3::ZERO, Vec3::ONE);
        for i in 0..5 {
            draw.push(ShapeInstance::new(
                ShapeKind::Quad,
                Vec3::new(-20.0 + i as f32 * 10.0, -0.5, -15.0),
                Vec3::new(5.0, 3.0, 5.0),
                hill_color,
            ));
        }
        draw.push(
            ShapeInstance::new(
                ShapeKind::Quad,
                Vec3::new(0.0, 0.0, -20.0),
                Vec3::new(40.0, 0.2, 1.0),
                Vec3::ONE,
            )
            .with_alpha(0.7),
        );
    }

    /// Sky dome over a lighter horizon band, the sun and a row of clouds.
    fn render_skybox(draw: &mut DrawList) {
        draw.push(ShapeInstance::new(
            ShapeKind::Quad,
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(40.0, 20.0, 40.0),
            SKY_TOP_COLOR,
        ));
        draw.push(ShapeInstance::new(
            ShapeKind::Quad,
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::new(40.0, 10.0, 40.0),
            SKY_HORIZON_COLOR,
        ));
        draw.push(ShapeInstance::new(
            ShapeKind::Quad,
            Vec3::new(20.0, 15.0, -20.0),
            Vec3::splat(5.0),
            SUN_COLOR,
        ));
        for i in 0..CLOUDS {
            draw.push(
                ShapeInstance::new(
                    ShapeKind::Quad,
                    Vec3::new(-15.0 + i as f32 * 5.0, 2.0, -15.0),
                    Vec3::new(3.0, 1.0, 1.0),
                    Vec3::ONE,
                )
                .with_alpha(0.8),
            );
        }
    }

    fn render_coffee_pot(&self, draw: &mut DrawList) {
        let spout = self.system(EmitterKind::CoffeeCeremony).emitter().config().origin;
        draw.push(ShapeInstance::new(
            ShapeKind::Quad,
            spout + Vec3::new(0.0, -0.1, 0.0),
            Vec3::new(0.3, 0.2, 0.3),
            POT_COLOR,
        ));
        draw.push(ShapeInstance::new(
            ShapeKind::Quad,
            spout,
            Vec3::splat(0.1),
            SPOUT_COLOR,
        ));
    }
}

impl Demo for PhenomenaScene {
    fn title(&self) -> &str {
        "Natural Phenomena"
    }

    fn setup(&mut self, application: &mut Application) {
        application.camera.position = Vec3::new(0.0, 2.0, 8.0);
        application.camera.movement_scale = 100.0;
        application.camera.fov = 60.0;
    }

    fn handle_key(&mut self, _application: &mut Application, key: Key) {
        if let Some(kind) = key.digit().and_then(EmitterKind::from_digit) {
            self.select(kind);
            return;
        }
        if key == Key::H {
            self.show_help = !self.show_help;
        }
    }

    fn update(&mut self, application: &Application) {
        if self.show_help && !self.help_logged {
            log::info!("\n{}", Self::help_text());
            self.help_logged = true;
        }
        let dt = application.clock.delta();
        let index = self.current.index();
        self.systems[index].update(dt);
    }

    fn render(&mut self, application: &Application, draw: &mut DrawList) {
        draw.camera = Some(application.camera.uniforms());
        Self::render_ground(draw);
        let system = &self.systems[self.current.index()];
        let billboards = self.renderer.prepare(system, &application.camera);
        draw.extend_billboards(billboards);
        if self.current == EmitterKind::CoffeeCeremony {
            self.render_coffee_pot(draw);
        }
        Self::render_skybox(draw);
    }
}
