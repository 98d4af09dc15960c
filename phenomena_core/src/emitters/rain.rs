use glam::Vec3;

use crate::emitter::{uniform, Emitter, EmitterConfig, EmitterKind, SimRng};
use crate::{Billboard, Particle};

/// Thin, fast drops falling over a wide area.
#[derive(Clone, Debug)]
pub struct Rain {
    pub config: EmitterConfig,
    pub fall_speed: f32,
}

impl Default for Rain {
    fn default() -> Self {
        Self {
            config: EmitterConfig {
                capacity: 1000,
                origin: Vec3::new(0.0, 10.0, 0.0),
                jitter: Vec3::new(10.0, 0.0, 10.0),
                gravity: Vec3::new(0.0, -9.8, 0.0),
                spawn_interval: 0.001,
            },
            fall_speed: 5.0,
        }
    }
}

impl Emitter for Rain {
    fn kind(&self) -> EmitterKind {
        EmitterKind::Rain
    }

    fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn spawn(&self, rng: &mut SimRng) -> Particle {
        let position = self.config.jittered_origin(rng, Vec3::ONE);
        let mut particle = Particle::new(position, uniform(rng, 0.1, 0.2), uniform(rng, 1.0, 2.0));
        particle.velocity = Vec3::new(0.0, -self.fall_speed, 0.0);
        particle.color = Vec3::new(0.3, 0.5, uniform(rng, 0.8, 1.0));
        particle
    }

    fn billboard(&self, particle: &Particle, _clock: f32) -> Billboard {
        Billboard::square(particle).with_extent(particle.size * 0.3, particle.size * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn drops_fall_straight_down() {
        let rain = Rain::default();
        let mut rng = SimRng::seed_from_u64(3);
        for _ in 0..100 {
            let drop = rain.spawn(&mut rng);
            assert_eq!(drop.velocity, Vec3::new(0.0, -5.0, 0.0));
            assert_eq!(drop.position.y, 10.0);
            assert!(drop.position.x.abs() <= 10.0 && drop.position.z.abs() <= 10.0);
            assert!((0.1..=0.2).contains(&drop.size));
            assert!((1.0..=2.0).contains(&drop.max_life));
            assert_eq!(drop.life, drop.max_life);
            assert!((0.8..=1.0).contains(&drop.color.z));
        }
    }

    #[test]
    fn drops_are_stretched_vertically() {
        let rain = Rain::default();
        let drop = Particle::new(Vec3::ZERO, 0.2, 1.0);
        let billboard = rain.billboard(&drop, 0.0);
        assert!((billboard.width - 0.06).abs() < 1e-6);
        assert!((billboard.height - 0.4).abs() < 1e-6);
        assert!(billboard.aspect_ratio() < 1.0);
    }
}
