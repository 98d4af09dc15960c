use glam::Vec3;

use crate::emitter::{angle, uniform, Emitter, EmitterConfig, EmitterKind, SimRng};
use crate::{Billboard, Particle};

/// Sheet of water tipping over a ledge and spraying outwards.
#[derive(Clone, Debug)]
pub struct Waterfall {
    pub config: EmitterConfig,
    /// Radius of the sideways spray.
    pub spread: f32,
    /// Largest forward push over the ledge.
    pub push: f32,
}

impl Default for Waterfall {
    fn default() -> Self {
        Self {
            config: EmitterConfig {
                capacity: 2000,
                origin: Vec3::new(0.0, 5.0, -5.0),
                jitter: Vec3::new(2.0, 0.1, 0.1),
                gravity: Vec3::new(0.0, -9.8, 0.0),
                spawn_interval: 0.0005,
            },
            spread: 0.3,
            push: 2.0,
        }
    }
}

impl Emitter for Waterfall {
    fn kind(&self) -> EmitterKind {
        EmitterKind::Waterfall
    }

    fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn spawn(&self, rng: &mut SimRng) -> Particle {
        let position = self.config.jittered_origin(rng, Vec3::ONE);
        let a = angle(rng);
        let velocity = Vec3::new(
            self.spread * a.sin(),
            uniform(rng, -1.0, 0.0),
            self.spread * a.cos() + uniform(rng, 0.0, self.push),
        );
        let color = Vec3::new(0.2, uniform(rng, 0.6, 0.8), uniform(rng, 0.7, 0.9));
        let mut particle = Particle::new(position, uniform(rng, 0.3, 0.6), uniform(rng, 2.0, 4.0));
        particle.velocity = velocity;
        particle.color = color;
        particle
    }

    fn billboard(&self, particle: &Particle, clock: f32) -> Billboard {
        let ripple = 1.0 + 0.2 * (5.0 * clock + 2.0 * particle.position.x).sin();
        Billboard::square(particle).with_extent(particle.size * ripple, particle.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn spray_stays_within_configured_ranges() {
        let waterfall = Waterfall::default();
        let mut rng = SimRng::seed_from_u64(11);
        for _ in 0..200 {
            let drop = waterfall.spawn(&mut rng);
            assert!(drop.position.x.abs() <= 2.0);
            assert!((drop.position.y - 5.0).abs() <= 0.1 + 1e-6);
            assert!((-1.0..=0.0).contains(&drop.velocity.y));
            assert!(drop.velocity.x.abs() <= 0.3 + 1e-6);
            assert!(drop.velocity.z >= -0.3 - 1e-6 && drop.velocity.z <= 2.3 + 1e-6);
            assert_eq!(drop.color.x, 0.2);
            assert!((0.3..=0.6).contains(&drop.size));
            assert!((2.0..=4.0).contains(&drop.life));
        }
    }

    #[test]
    fn width_ripples_around_size() {
        let waterfall = Waterfall::default();
        let drop = Particle::new(Vec3::ZERO, 0.5, 2.0);
        let flat = waterfall.billboard(&drop, 0.0);
        assert!((flat.width - 0.5).abs() < 1e-6);
        assert_eq!(flat.height, 0.5);

        let peak = waterfall.billboard(&drop, std::f32::consts::FRAC_PI_2 / 5.0);
        assert!((peak.width - 0.6).abs() < 1e-5);
    }
}
