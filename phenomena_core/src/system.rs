use rand::SeedableRng;

use crate::emitter::SimRng;
use crate::{Billboard, Emitter, Error, Particle};

/// Bounded pool of particles driven by one [`Emitter`].
///
/// Spawning is paced by an accumulator so the average emission rate does
/// not depend on how the elapsed time is split into frames. The pool never
/// grows past the emitter's capacity and never evicts live particles.
pub struct ParticleSystem {
    emitter: Box<dyn Emitter>,
    particles: Vec<Particle>,
    accumulator: f32,
    clock: f32,
    active: bool,
    rng: SimRng,
}

impl ParticleSystem {
    /// Creates an active system seeded from the OS, pre-populated with a
    /// quarter of its capacity.
    pub fn new(emitter: Box<dyn Emitter>) -> Result<Self, Error> {
        Self::with_rng(emitter, SimRng::from_os_rng())
    }

    /// Same as [`ParticleSystem::new`] with a caller-provided random source.
    pub fn with_rng(emitter: Box<dyn Emitter>, rng: SimRng) -> Result<Self, Error> {
        let mut system = Self::empty(emitter, rng)?;
        let prefill = system.capacity() / 4;
        for _ in 0..prefill {
            system.spawn_particle();
        }
        log::debug!(
            "Created {} particle system with {} of {} particles",
            system.name(),
            system.len(),
            system.capacity()
        );
        Ok(system)
    }

    /// Creates an active system with no live particles.
    pub fn empty(emitter: Box<dyn Emitter>, rng: SimRng) -> Result<Self, Error> {
        emitter.config().validate(emitter.name())?;
        let capacity = emitter.config().capacity;
        Ok(Self {
            emitter,
            particles: Vec::with_capacity(capacity),
            accumulator: 0.0,
            clock: 0.0,
            active: true,
            rng,
        })
    }

    /// Ages, moves and culls the live particles, then emits new ones for the
    /// elapsed time. Does nothing while the system is inactive.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.clock += dt;

        let emitter = &self.emitter;
        let clock = self.clock;
        let before = self.particles.len();
        self.particles.retain_mut(|particle| {
            particle.life -= dt;
            if particle.life <= 0.0 {
                return false;
            }
            emitter.advance(particle, dt, clock);
            true
        });
        let expired = before - self.particles.len();

        let interval = self.emitter.config().spawn_interval;
        let capacity = self.capacity();
        self.accumulator += dt;
        let mut spawned = 0;
        while self.accumulator >= interval && self.particles.len() < capacity {
            self.spawn_particle();
            self.accumulator -= interval;
            spawned += 1;
        }

        log::trace!(
            "{}: {} expired, {} spawned, {} live",
            self.name(),
            expired,
            spawned,
            self.particles.len()
        );
    }

    /// Emits a single particle unless the pool is full. Returns whether a
    /// particle was added.
    pub fn spawn_particle(&mut self) -> bool {
        if self.particles.len() >= self.capacity() {
            return false;
        }
        let particle = self.emitter.spawn(&mut self.rng);
        self.particles.push(particle);
        true
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Each live particle with the quad it should be drawn as.
    pub fn billboards(&self) -> impl Iterator<Item = (&Particle, Billboard)> + '_ {
        self.particles
            .iter()
            .map(move |particle| (particle, self.emitter.billboard(particle, self.clock)))
    }

    pub fn emitter(&self) -> &dyn Emitter {
        self.emitter.as_ref()
    }

    pub fn name(&self) -> &'static str {
        self.emitter.name()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.emitter.config().capacity
    }

    /// Total simulated time while active.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Elapsed time not yet converted into spawns.
    pub fn spawn_accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            log::debug!(
                "{} particle system {}",
                self.name(),
                if active { "resumed" } else { "paused" }
            );
        }
        self.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmitterConfig, EmitterKind, Rain};
    use glam::Vec3;

    struct Steady {
        config: EmitterConfig,
        life: f32,
    }

    impl Steady {
        fn boxed(capacity: usize, spawn_interval: f32, life: f32) -> Box<dyn Emitter> {
            Box::new(Steady {
                config: EmitterConfig {
                    capacity,
                    spawn_interval,
                    gravity: Vec3::ZERO,
                    ..Default::default()
                },
                life,
            })
        }
    }

    impl Emitter for Steady {
        fn kind(&self) -> EmitterKind {
            EmitterKind::Dust
        }

        fn config(&self) -> &EmitterConfig {
            &self.config
        }

        fn spawn(&self, _rng: &mut SimRng) -> Particle {
            let mut particle = Particle::new(Vec3::ZERO, 1.0, self.life);
            particle.velocity = Vec3::X;
            particle
        }
    }

    fn rng() -> SimRng {
        SimRng::seed_from_u64(42)
    }

    #[test]
    fn accumulated_time_spawns_several_particles_per_update() {
        let mut system = ParticleSystem::empty(Steady::boxed(4, 0.1, 10.0), rng()).unwrap();
        system.update(0.35);
        assert_eq!(system.len(), 3);
        assert!((system.spawn_accumulator() - 0.05).abs() < 1e-5);
    }

    #[test]
    fn life_decreases_until_removal() {
        let mut system = ParticleSystem::empty(Steady::boxed(4, 100.0, 2.0), rng()).unwrap();
        assert!(system.spawn_particle());
        for _ in 0..3 {
            system.update(0.5);
        }
        let particle = system.particles()[0];
        assert_eq!(particle.life, 0.5);
        assert_eq!(particle.alpha(), 0.25);
        assert_eq!(particle.position, Vec3::new(1.5, 0.0, 0.0));

        system.update(0.5);
        assert!(system.is_empty());
    }

    #[test]
    fn capacity_is_a_hard_cap() {
        let mut system = ParticleSystem::empty(Steady::boxed(4, 0.1, 10.0), rng()).unwrap();
        system.update(1.0);
        assert_eq!(system.len(), 4);
        assert!(!system.spawn_particle());
        // Unspent time stays banked while the pool is full.
        assert!(system.spawn_accumulator() > 0.5);
    }

    #[test]
    fn inactive_systems_are_frozen() {
        let mut system = ParticleSystem::empty(Steady::boxed(4, 0.1, 10.0), rng()).unwrap();
        system.spawn_particle();
        system.set_active(false);
        system.update(0.5);
        assert_eq!(system.len(), 1);
        assert_eq!(system.clock(), 0.0);
        assert_eq!(system.particles()[0].life, 10.0);

        system.set_active(true);
        system.update(0.25);
        assert_eq!(system.clock(), 0.25);
    }

    #[test]
    fn new_prefills_a_quarter_of_capacity() {
        let system = ParticleSystem::with_rng(Box::new(Rain::default()), rng()).unwrap();
        assert_eq!(system.len(), 250);
        assert!(system.is_active());
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let result = ParticleSystem::empty(Steady::boxed(0, 0.1, 1.0), rng());
        assert!(matches!(result, Err(Error::ZeroCapacity { .. })));
    }

    #[test]
    fn billboards_follow_live_particles() {
        let mut system = ParticleSystem::empty(Steady::boxed(8, 0.1, 2.0), rng()).unwrap();
        system.update(0.45);
        let boards: Vec<_> = system.billboards().collect();
        assert_eq!(boards.len(), system.len());
        for (particle, board) in boards {
            assert_eq!(board.width, particle.size);
            assert!((0.0..=1.0).contains(&board.alpha));
        }
    }

    #[test]
    fn unsampleable_jitter_is_rejected_before_spawning() {
        for extent in [f32::INFINITY, f32::MAX] {
            let mut rain = Rain::default();
            rain.config.jitter = Vec3::new(extent, 0.0, 0.0);
            let result = ParticleSystem::empty(Box::new(rain), rng());
            assert!(matches!(result, Err(Error::NonFiniteSetting { .. })));
        }
    }
}
