use glam::Vec3;

use crate::emitter::{angle, uniform, Emitter, EmitterConfig, EmitterKind, SimRng};
use crate::Particle;

/// Slow, long-lived dust drifting close to the ground.
#[derive(Clone, Debug)]
pub struct Dust {
    pub config: EmitterConfig,
}

impl Default for Dust {
    fn default() -> Self {
        Self {
            config: EmitterConfig {
                capacity: 600,
                origin: Vec3::new(0.0, 0.1, 0.0),
                jitter: Vec3::new(10.0, 0.1, 10.0),
                gravity: Vec3::new(0.0, 0.05, 0.0),
                spawn_interval: 0.01,
            },
        }
    }
}

impl Emitter for Dust {
    fn kind(&self) -> EmitterKind {
        EmitterKind::Dust
    }

    fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn spawn(&self, rng: &mut SimRng) -> Particle {
        let position = self.config.jittered_origin(rng, Vec3::ONE);
        let a = angle(rng);
        let speed = uniform(rng, 0.05, 0.2);
        let velocity = Vec3::new(speed * a.cos(), uniform(rng, -0.05, 0.1), speed * a.sin());
        let brightness = uniform(rng, 0.8, 1.0);
        let mut particle = Particle::new(position, uniform(rng, 0.2, 0.4), uniform(rng, 5.0, 10.0));
        particle.velocity = velocity;
        particle.color = Vec3::new(0.9, 0.7, 0.5) * brightness;
        particle
    }
}
