use glam::{Quat, Vec3};
use phenomena_core::emitter::uniform;
use phenomena_core::SimRng;
use rand::SeedableRng;

use crate::application::Application;
use crate::demo::Demo;
use crate::input::Key;
use crate::render::{DrawList, ShapeInstance, ShapeKind};

pub const RUNNERS: usize = 32;
pub const LANES: usize = 5;
pub const TRACK_LENGTH: f32 = 50.0;
const LANE_WIDTH: f32 = 1.5;
const LANE_SPACING: f32 = 0.5;
const TOTAL_WIDTH: f32 = LANES as f32 * LANE_WIDTH + (LANES - 1) as f32 * LANE_SPACING;

#[derive(Clone, Debug, PartialEq)]
pub struct Runner {
    pub name: String,
    pub lane: usize,
    /// Distance along the track. Runners start at `TRACK_LENGTH / 2` and
    /// run towards the negative end.
    pub position: f32,
    pub speed: f32,
    pub color: Vec3,
    pub finished: bool,
}

impl Runner {
    pub fn lane_center(lane: usize) -> f32 {
        -TOTAL_WIDTH / 2.0 + lane as f32 * (LANE_WIDTH + LANE_SPACING) + LANE_WIDTH / 2.0
    }
}

/// Runners spread over five lanes. Space starts and pauses, R resets.
pub struct Race {
    runners: Vec<Runner>,
    running: bool,
    rng: SimRng,
}

impl Race {
    pub fn new() -> Self {
        Self::with_rng(SimRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SimRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SimRng) -> Self {
        let mut race = Self {
            runners: Vec::new(),
            running: false,
            rng,
        };
        race.reset();
        race
    }

    /// Everyone back on the start line with fresh speeds, paused.
    pub fn reset(&mut self) {
        let rng = &mut self.rng;
        self.runners = (0..RUNNERS)
            .map(|index| Runner {
                name: format!("Runner {}", index + 1),
                lane: index % LANES,
                position: TRACK_LENGTH / 2.0,
                speed: uniform(rng, 2.5, 4.0),
                color: Vec3::new(
                    uniform(rng, 0.2, 1.0),
                    uniform(rng, 0.2, 1.0),
                    uniform(rng, 0.2, 1.0),
                ),
                finished: false,
            })
            .collect();
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.is_finished() {
            log::info!("Race is over, press R to reset");
            return;
        }
        self.running = !self.running;
        log::info!("Race {}", if self.running { "started" } else { "paused" });
    }

    /// Moves every unfinished runner towards the finish line.
    pub fn advance(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        for runner in self.runners.iter_mut().filter(|runner| !runner.finished) {
            runner.position -= runner.speed * dt;
            if runner.position <= -TRACK_LENGTH / 2.0 {
                runner.finished = true;
                log::debug!("{} finished", runner.name);
            }
        }
        if self.is_finished() {
            self.running = false;
            log::info!("All runners finished");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.runners.iter().all(|runner| runner.finished)
    }

    pub fn runners(&self) -> &[Runner] {
        &self.runners
    }

    fn render_runner(runner: &Runner, time: f32, draw: &mut DrawList) {
        let base = Vec3::new(Runner::lane_center(runner.lane), 0.0, runner.position);
        let swing = if runner.finished {
            0.0
        } else {
            (time * runner.speed * 3.0).sin() * 0.5
        };
        draw.push(ShapeInstance::new(
            ShapeKind::Cube,
            base + Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.4, 0.6, 0.2),
            runner.color,
        ));
        draw.push(ShapeInstance::new(
            ShapeKind::Sphere,
            base + Vec3::new(0.0, 1.5, 0.0),
            Vec3::splat(0.25),
            Vec3::new(0.9, 0.75, 0.6),
        ));
        for (side, phase) in [(-0.1, swing), (0.1, -swing)] {
            draw.push(
                ShapeInstance::new(
                    ShapeKind::Cube,
                    base + Vec3::new(side, 0.35, 0.0),
                    Vec3::new(0.12, 0.7, 0.12),
                    runner.color * 0.6,
                )
                .with_rotation(Quat::from_rotation_x(phase)),
            );
        }
    }
}

impl Default for Race {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Race {
    fn title(&self) -> &str {
        "Running Race"
    }

    fn setup(&mut self, application: &mut Application) {
        let camera = &mut application.camera;
        camera.position = Vec3::new(0.0, 5.0, 15.0);
        camera.pitch = -10.0;
        camera.fov = 45.0;
        camera.aspect_ratio = 1280.0 / 720.0;
        camera.movement_scale = 10.0;
    }

    fn handle_key(&mut self, _application: &mut Application, key: Key) {
        match key {
            Key::Space => self.toggle(),
            Key::R => {
                self.reset();
                log::info!("Race reset");
            }
            _ => {}
        }
    }

    fn update(&mut self, application: &Application) {
        self.advance(application.clock.delta());
    }

    fn render(&mut self, application: &Application, draw: &mut DrawList) {
        draw.camera = Some(application.camera.uniforms());
        let flat = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);
        draw.push(
            ShapeInstance::new(
                ShapeKind::Quad,
                Vec3::ZERO,
                Vec3::new(100.0, 100.0, 1.0),
                Vec3::new(0.25, 0.55, 0.25),
            )
            .with_rotation(flat),
        );
        for lane in 0..LANES {
            draw.push(
                ShapeInstance::new(
                    ShapeKind::Quad,
                    Vec3::new(Runner::lane_center(lane), 0.01, 0.0),
                    Vec3::new(LANE_WIDTH, TRACK_LENGTH, 1.0),
                    Vec3::splat(0.8),
                )
                .with_rotation(flat),
            );
        }
        let time = application.clock.elapsed();
        for runner in &self.runners {
            Self::render_runner(runner, time, draw);
        }
    }
}
