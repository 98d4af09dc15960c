use glam::Vec3;
use rand::Rng;

use crate::{Billboard, Error, Particle};

/// Random source shared by all emitters.
pub type SimRng = rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmitterKind {
    Rain,
    Waterfall,
    Fire,
    Dust,
    CoffeeCeremony,
}

impl EmitterKind {
    pub const ALL: [EmitterKind; 5] = [
        EmitterKind::Rain,
        EmitterKind::Waterfall,
        EmitterKind::Fire,
        EmitterKind::Dust,
        EmitterKind::CoffeeCeremony,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EmitterKind::Rain => "rain",
            EmitterKind::Waterfall => "waterfall",
            EmitterKind::Fire => "fire",
            EmitterKind::Dust => "dust",
            EmitterKind::CoffeeCeremony => "coffee ceremony",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EmitterKind::Rain => "Rain (Ethiopian highlands)",
            EmitterKind::Waterfall => "Waterfall (Blue Nile Falls)",
            EmitterKind::Fire => "Fire (Traditional cooking fire)",
            EmitterKind::Dust => "Dust (Dry season dust)",
            EmitterKind::CoffeeCeremony => "Coffee Ceremony smoke",
        }
    }

    /// Position in [`EmitterKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            EmitterKind::Rain => 0,
            EmitterKind::Waterfall => 1,
            EmitterKind::Fire => 2,
            EmitterKind::Dust => 3,
            EmitterKind::CoffeeCeremony => 4,
        }
    }

    /// Maps the selection keys 1 to 5 onto emitters.
    pub fn from_digit(digit: u8) -> Option<EmitterKind> {
        match digit {
            1..=5 => Some(Self::ALL[digit as usize - 1]),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmitterConfig {
    /// Hard cap on live particles. Spawning stops at the cap, nothing is evicted.
    pub capacity: usize,
    pub origin: Vec3,
    /// Per-axis half-width of the uniform spawn box around `origin`.
    pub jitter: Vec3,
    pub gravity: Vec3,
    /// Seconds between two spawns.
    pub spawn_interval: f32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            origin: Vec3::ZERO,
            jitter: Vec3::ZERO,
            gravity: Vec3::new(0.0, -9.8, 0.0),
            spawn_interval: 0.01,
        }
    }
}

impl EmitterConfig {
    pub fn validate(&self, emitter: &'static str) -> Result<(), Error> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity { emitter });
        }
        if !self.spawn_interval.is_finite() || self.spawn_interval <= 0.0 {
            return Err(Error::InvalidSpawnInterval {
                emitter,
                interval: self.spawn_interval,
            });
        }
        let settings = [
            ("origin", self.origin),
            ("jitter", self.jitter),
            ("gravity", self.gravity),
        ];
        for (setting, value) in settings {
            if !value.is_finite() {
                return Err(Error::NonFiniteSetting { emitter, setting });
            }
        }
        // Sampling draws across the full box width.
        if !(self.jitter * 2.0).is_finite() {
            return Err(Error::NonFiniteSetting {
                emitter,
                setting: "jitter span",
            });
        }
        Ok(())
    }

    /// Uniform point in the spawn box, with the box scaled per axis by `spread`.
    pub fn jittered_origin(&self, rng: &mut SimRng, spread: Vec3) -> Vec3 {
        let extent = self.jitter * spread;
        self.origin
            + Vec3::new(
                symmetric(rng, extent.x),
                symmetric(rng, extent.y),
                symmetric(rng, extent.z),
            )
    }
}

/// Uniform sample in `[low, high]`. Degenerate ranges, and ranges whose
/// width overflows, collapse to `low`.
pub fn uniform(rng: &mut SimRng, low: f32, high: f32) -> f32 {
    if low >= high || low.is_nan() || high.is_nan() || !(high - low).is_finite() {
        return low;
    }
    rng.random_range(low..=high)
}

/// Uniform sample in `[-extent, extent]`.
pub fn symmetric(rng: &mut SimRng, extent: f32) -> f32 {
    let extent = extent.abs();
    uniform(rng, -extent, extent)
}

/// Uniform angle in `[0, 2π]`.
pub fn angle(rng: &mut SimRng) -> f32 {
    uniform(rng, 0.0, std::f32::consts::TAU)
}

/// Spawn and motion rules for one category of particle.
pub trait Emitter {
    fn kind(&self) -> EmitterKind;

    fn config(&self) -> &EmitterConfig;

    fn spawn(&self, rng: &mut SimRng) -> Particle;

    /// Moves a particle that survived this frame. `clock` is the owning
    /// system's elapsed simulation time.
    fn advance(&self, particle: &mut Particle, dt: f32, _clock: f32) {
        particle.integrate(self.config().gravity, dt);
    }

    fn billboard(&self, particle: &Particle, _clock: f32) -> Billboard {
        Billboard::square(particle)
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn digits_select_emitters_in_order() {
        assert_eq!(EmitterKind::from_digit(1), Some(EmitterKind::Rain));
        assert_eq!(
            EmitterKind::from_digit(5),
            Some(EmitterKind::CoffeeCeremony)
        );
        assert_eq!(EmitterKind::from_digit(0), None);
        assert_eq!(EmitterKind::from_digit(6), None);
        for (index, kind) in EmitterKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), index);
        }
    }

    #[test]
    fn validate_rejects_empty_pool_and_bad_interval() {
        let config = EmitterConfig {
            capacity: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate("test"),
            Err(Error::ZeroCapacity { emitter: "test" })
        );

        for interval in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = EmitterConfig {
                spawn_interval: interval,
                ..Default::default()
            };
            assert!(matches!(
                config.validate("test"),
                Err(Error::InvalidSpawnInterval { .. })
            ));
        }
        assert!(EmitterConfig::default().validate("test").is_ok());
    }

    #[test]
    fn validate_rejects_settings_that_cannot_be_sampled() {
        let infinite = EmitterConfig {
            jitter: Vec3::new(f32::INFINITY, 0.0, 0.0),
            ..Default::default()
        };
        assert_eq!(
            infinite.validate("rain"),
            Err(Error::NonFiniteSetting {
                emitter: "rain",
                setting: "jitter"
            })
        );

        let huge = EmitterConfig {
            jitter: Vec3::new(f32::MAX, 0.0, 0.0),
            ..Default::default()
        };
        assert_eq!(
            huge.validate("rain"),
            Err(Error::NonFiniteSetting {
                emitter: "rain",
                setting: "jitter span"
            })
        );

        let origin = EmitterConfig {
            origin: Vec3::new(0.0, f32::NAN, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            origin.validate("rain"),
            Err(Error::NonFiniteSetting { setting: "origin", .. })
        ));

        let gravity = EmitterConfig {
            gravity: Vec3::new(0.0, f32::NEG_INFINITY, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            gravity.validate("rain"),
            Err(Error::NonFiniteSetting { setting: "gravity", .. })
        ));
    }

    #[test]
    fn jittered_origin_stays_in_box() {
        let mut rng = SimRng::seed_from_u64(7);
        let config = EmitterConfig {
            origin: Vec3::new(1.0, 2.0, 3.0),
            jitter: Vec3::new(0.5, 0.0, 2.0),
            ..Default::default()
        };
        for _ in 0..200 {
            let point = config.jittered_origin(&mut rng, Vec3::new(2.0, 1.0, 1.0));
            assert!((point.x - 1.0).abs() <= 1.0);
            assert_eq!(point.y, 2.0);
            assert!((point.z - 3.0).abs() <= 2.0);
        }
    }

    #[test]
    fn uniform_handles_degenerate_ranges() {
        let mut rng = SimRng::seed_from_u64(1);
        assert_eq!(uniform(&mut rng, 0.3, 0.3), 0.3);
        assert_eq!(uniform(&mut rng, 1.0, 0.0), 1.0);
        assert_eq!(uniform(&mut rng, -f32::MAX, f32::MAX), -f32::MAX);
        assert_eq!(symmetric(&mut rng, f32::INFINITY), f32::NEG_INFINITY);
        for _ in 0..100 {
            let value = uniform(&mut rng, 0.5, 1.5);
            assert!((0.5..=1.5).contains(&value));
        }
    }
}
