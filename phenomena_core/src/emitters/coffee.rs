use glam::Vec3;
use rand::Rng;

use crate::emitter::{uniform, Emitter, EmitterConfig, EmitterKind, SimRng};
use crate::{Billboard, Particle};

const LEFT: f32 = 0.0;
const RIGHT: f32 = 1.0;

/// Two thin smoke plumes curling up from a coffee pot spout.
///
/// Each particle belongs to the left or right plume through
/// [`Particle::stream`]. The plumes drift apart as they rise, zigzag at
/// slightly different frequencies and are pulled back onto their path so
/// they stay recognisable as two wisps.
#[derive(Clone, Debug)]
pub struct CoffeeCeremony {
    pub config: EmitterConfig,
    /// Sideways speed at the spout, negated for the left plume.
    pub drift: f32,
    /// Horizontal divergence per unit of height.
    pub divergence: f32,
    pub left_frequency: f32,
    pub right_frequency: f32,
}

impl Default for CoffeeCeremony {
    fn default() -> Self {
        Self {
            config: EmitterConfig {
                capacity: 500,
                origin: Vec3::new(0.0, 0.2, -2.5),
                jitter: Vec3::new(0.05, 0.02, 0.05),
                gravity: Vec3::new(0.0, 0.4, 0.0),
                spawn_interval: 0.008,
            },
            drift: 0.2,
            divergence: 0.2,
            left_frequency: 2.5,
            right_frequency: 3.2,
        }
    }
}

impl CoffeeCeremony {
    fn is_left(particle: &Particle) -> bool {
        particle.stream < 0.5
    }

    fn frequency(&self, particle: &Particle) -> f32 {
        if Self::is_left(particle) {
            self.left_frequency
        } else {
            self.right_frequency
        }
    }

    fn side(particle: &Particle) -> f32 {
        if Self::is_left(particle) {
            -1.0
        } else {
            1.0
        }
    }

    /// Height of a particle above the spout.
    fn height(&self, particle: &Particle) -> f32 {
        particle.position.y - self.config.origin.y
    }
}

impl Emitter for CoffeeCeremony {
    fn kind(&self) -> EmitterKind {
        EmitterKind::CoffeeCeremony
    }

    fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn spawn(&self, rng: &mut SimRng) -> Particle {
        let offset = Vec3::new(
            uniform(rng, -0.03, 0.03),
            uniform(rng, 0.0, 0.03),
            uniform(rng, -0.03, 0.03),
        );
        let stream = if rng.random_bool(0.5) { LEFT } else { RIGHT };
        let gray = uniform(rng, 0.75, 0.85);
        let mut particle = Particle::new(
            self.config.origin + offset,
            uniform(rng, 0.15, 0.25),
            uniform(rng, 4.0, 6.0),
        );
        particle.stream = stream;
        let side = Self::side(&particle);
        particle.velocity = Vec3::new(side * self.drift, uniform(rng, 0.7, 0.9), 0.0);
        particle.color = Vec3::splat(gray);
        particle
    }

    fn advance(&self, particle: &mut Particle, dt: f32, clock: f32) {
        let origin = self.config.origin;
        let h = self.height(particle);
        let frequency = self.frequency(particle);

        particle.velocity += self.config.gravity * dt * 0.7;

        let amplitude = 0.2 * (h / 2.0).min(1.0);
        let zx = (clock * frequency + h * 2.0).sin() * amplitude;
        let zz = (clock * frequency * 0.7 + h * 1.5).cos() * amplitude * 0.5;
        let zigzag = Vec3::new(zx, 0.0, zz) * dt;

        let target_x = origin.x + Self::side(particle) * self.divergence * h + zx * 3.0;
        let target_z = origin.z + zz * 3.0;
        let correction = Vec3::new(
            (target_x - particle.position.x) * 0.3 * dt,
            0.0,
            (target_z - particle.position.z) * 0.3 * dt,
        );

        particle.position += particle.velocity * dt + zigzag + correction;

        let fade = (h / 3.0).min(1.0);
        particle.color = Vec3::splat(0.8 + (0.95 - 0.8) * fade);
    }

    fn billboard(&self, particle: &Particle, clock: f32) -> Billboard {
        let hf = (self.height(particle) / 4.0).clamp(0.0, 1.0);
        let roll = 0.3 * (clock * self.frequency(particle) + particle.position.y * 2.0).sin();
        Billboard::square(particle)
            .with_extent(particle.size * 0.1, particle.size * (1.5 + 2.0 * hf))
            .with_roll(roll)
            .fade(1.0 - 0.6 * hf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn both_plumes_leave_the_spout() {
        let smoke = CoffeeCeremony::default();
        let mut rng = SimRng::seed_from_u64(9);
        let mut left = 0;
        for _ in 0..400 {
            let wisp = smoke.spawn(&mut rng);
            let offset = wisp.position - smoke.config.origin;
            assert!(offset.x.abs() <= 0.03 + 1e-6);
            assert!((0.0 - 1e-6..=0.03 + 1e-6).contains(&offset.y));
            assert!((0.7..=0.9).contains(&wisp.velocity.y));
            if wisp.stream == LEFT {
                left += 1;
                assert_eq!(wisp.velocity.x, -0.2);
            } else {
                assert_eq!(wisp.stream, RIGHT);
                assert_eq!(wisp.velocity.x, 0.2);
            }
            assert_eq!(wisp.color.x, wisp.color.y);
            assert!((0.75..=0.85).contains(&wisp.color.x));
        }
        assert!((120..280).contains(&left), "{left} left wisps");
    }

    #[test]
    fn plumes_diverge_while_rising() {
        let smoke = CoffeeCeremony::default();
        let mut rng = SimRng::seed_from_u64(2);
        let mut left = smoke.spawn(&mut rng);
        left.stream = LEFT;
        left.position = smoke.config.origin;
        left.velocity = Vec3::new(-0.2, 0.8, 0.0);
        let mut right = left;
        right.stream = RIGHT;
        right.velocity.x = 0.2;

        let dt = 1.0 / 60.0;
        let mut clock = 0.0;
        for _ in 0..60 {
            clock += dt;
            smoke.advance(&mut left, dt, clock);
            smoke.advance(&mut right, dt, clock);
        }
        assert!(left.position.y > smoke.config.origin.y + 0.5);
        assert!(left.position.x < right.position.x);
        assert!(left.color.x > 0.8);
    }

    #[test]
    fn single_step_follows_the_plume_path() {
        let smoke = CoffeeCeremony::default();
        // One unit above the spout at clock zero: amplitude 0.1,
        // zx = 0.1·sin(2) and zz = 0.05·cos(1.5) for both plumes.
        let mut left = Particle::new(Vec3::new(0.0, 1.2, -2.5), 0.2, 5.0);
        left.stream = LEFT;
        left.velocity = Vec3::new(-0.2, 0.8, 0.0);
        let mut right = left;
        right.stream = RIGHT;
        right.velocity.x = 0.2;

        smoke.advance(&mut left, 0.5, 0.0);
        smoke.advance(&mut right, 0.5, 0.0);

        assert!((left.velocity - Vec3::new(-0.2, 0.94, 0.0)).length() < 1e-6);
        assert!((right.velocity - Vec3::new(0.2, 0.94, 0.0)).length() < 1e-6);

        assert!((left.position.x - -0.043_616_75).abs() < 1e-5);
        assert!((right.position.x - 0.216_383_25).abs() < 1e-5);
        for wisp in [left, right] {
            assert!((wisp.position.y - 1.67).abs() < 1e-5);
            assert!((wisp.position.z - -2.496_64).abs() < 1e-5);
            assert!((wisp.color - Vec3::splat(0.85)).length() < 1e-5);
        }
    }

    #[test]
    fn wisps_stretch_and_fade_with_height() {
        let smoke = CoffeeCeremony::default();
        let mut low = Particle::new(smoke.config.origin, 0.2, 5.0);
        low.stream = LEFT;
        let mut high = low;
        high.position.y += 4.0;

        let low_board = smoke.billboard(&low, 0.0);
        let high_board = smoke.billboard(&high, 0.0);

        assert!((low_board.width - 0.02).abs() < 1e-6);
        assert!((low_board.height - 0.3).abs() < 1e-6);
        assert!((low_board.alpha - 1.0).abs() < 1e-6);
        assert!((high_board.height - 0.7).abs() < 1e-5);
        assert!((high_board.alpha - 0.4).abs() < 1e-5);
        assert!(high_board.roll.abs() <= 0.3);
    }

    #[test]
    fn height_fraction_is_clamped_below_the_spout() {
        let smoke = CoffeeCeremony::default();
        let mut sunk = Particle::new(smoke.config.origin - Vec3::Y, 0.2, 5.0);
        sunk.life = 5.0;
        let board = smoke.billboard(&sunk, 1.0);
        assert!((board.height - 0.3).abs() < 1e-6);
        assert!(board.alpha <= 1.0);
    }
}
