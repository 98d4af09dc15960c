use glam::Vec3;
use rand::Rng;

use crate::emitter::{angle, uniform, Emitter, EmitterConfig, EmitterKind, SimRng};
use crate::Particle;

/// Open cooking fire. Embers rise under a weak upward pull and burn out fast.
#[derive(Clone, Debug)]
pub struct Fire {
    pub config: EmitterConfig,
    /// Chance that a spawned ember is deep red rather than orange.
    pub red_share: f64,
}

impl Default for Fire {
    fn default() -> Self {
        Self {
            config: EmitterConfig {
                capacity: 800,
                origin: Vec3::new(0.0, 0.0, -2.0),
                jitter: Vec3::new(1.0, 0.1, 1.0),
                gravity: Vec3::new(0.0, 2.0, 0.0),
                spawn_interval: 0.0005,
            },
            red_share: 0.6,
        }
    }
}

impl Emitter for Fire {
    fn kind(&self) -> EmitterKind {
        EmitterKind::Fire
    }

    fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn spawn(&self, rng: &mut SimRng) -> Particle {
        let position = self.config.jittered_origin(rng, Vec3::new(1.5, 1.0, 1.5));
        let a = angle(rng);
        let force = uniform(rng, 0.5, 1.5);
        let velocity = Vec3::new(force * a.cos(), uniform(rng, 0.5, 2.0), force * a.sin());
        let color = if rng.random_bool(self.red_share) {
            Vec3::new(1.0, uniform(rng, 0.1, 0.3), 0.0)
        } else {
            Vec3::new(1.0, uniform(rng, 0.4, 0.7), 0.0)
        };
        let mut particle = Particle::new(position, uniform(rng, 0.5, 1.0), uniform(rng, 0.5, 1.5));
        particle.velocity = velocity;
        particle.color = color;
        particle
    }
}
