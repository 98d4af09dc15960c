use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: Vec3,
    pub size: f32,
    pub life: f32,
    pub max_life: f32,
    /// Sub-stream tag for emitters that split their output, 0.0 or 1.0.
    pub stream: f32,
}

impl Particle {
    /// A particle at rest with full life.
    pub fn new(position: Vec3, size: f32, life: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            color: Vec3::ONE,
            size,
            life,
            max_life: life,
            stream: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Remaining life fraction, used as the render alpha.
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    pub fn integrate(&mut self, acceleration: Vec3, dt: f32) {
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_follows_remaining_life() {
        let mut particle = Particle::new(Vec3::ZERO, 1.0, 2.0);
        assert_eq!(particle.alpha(), 1.0);
        particle.life = 0.5;
        assert_eq!(particle.alpha(), 0.25);
        particle.life = -0.1;
        assert_eq!(particle.alpha(), 0.0);
        assert!(!particle.is_alive());
    }

    #[test]
    fn integrate_applies_velocity_after_acceleration() {
        let mut particle = Particle::new(Vec3::ZERO, 1.0, 1.0);
        particle.velocity = Vec3::new(1.0, 0.0, 0.0);
        particle.integrate(Vec3::new(0.0, -10.0, 0.0), 0.5);
        assert_eq!(particle.velocity, Vec3::new(1.0, -5.0, 0.0));
        assert_eq!(particle.position, Vec3::new(0.5, -2.5, 0.0));
    }
}
