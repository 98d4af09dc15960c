//! Per-particle shape descriptors queried by renderers.
//!
//! Every emitter describes how its particles should look as a
//! camera-facing quad. Renderers only ever see a [`Billboard`], never the
//! concrete emitter behind it.

use crate::Particle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Billboard {
    /// Full width of the quad along the camera's right axis.
    pub width: f32,
    /// Full height of the quad along the camera's up axis.
    pub height: f32,
    /// Rotation about the view axis in radians, counter-clockwise.
    pub roll: f32,
    pub alpha: f32,
}

impl Billboard {
    /// Square quad of side `size`, faded by remaining life.
    pub fn square(particle: &Particle) -> Self {
        Self {
            width: particle.size,
            height: particle.size,
            roll: 0.0,
            alpha: particle.alpha(),
        }
    }

    pub fn with_extent(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_roll(mut self, roll: f32) -> Self {
        self.roll = roll;
        self
    }

    /// Multiplies the alpha, keeping the result in [0, 1].
    pub fn fade(mut self, factor: f32) -> Self {
        self.alpha = (self.alpha * factor).clamp(0.0, 1.0);
        self
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0.0 {
            return 0.0;
        }
        self.width / self.height
    }
}
