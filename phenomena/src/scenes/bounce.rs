use glam::{Vec2, Vec3};
use phenomena_core::emitter::uniform;
use phenomena_core::SimRng;
use rand::SeedableRng;

use crate::application::Application;
use crate::demo::Demo;
use crate::render::{DrawList, ShapeInstance};

pub const GROUND_HEIGHT: f32 = -0.8;
pub const ASPECT_RATIO: f32 = 800.0 / 600.0;
const BALL_COUNT: usize = 10;
const SKY_HEIGHT: f32 = 1.6;
const SHADOW_COLOR: Vec3 = Vec3::ZERO;

/// Penner's bounce ease-out on `t` in [0, 1].
pub fn bounce_ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 4.0 / 11.0 {
        (121.0 * t * t) / 16.0
    } else if t < 8.0 / 11.0 {
        (363.0 / 40.0 * t * t) - (99.0 / 10.0 * t) + 17.0 / 5.0
    } else if t < 9.0 / 10.0 {
        (4356.0 / 361.0 * t * t) - (35442.0 / 1805.0 * t) + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0 * t * t) - (513.0 / 25.0 * t) + 268.0 / 25.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallCategory {
    Rock,
    Fruit,
    Other,
}

impl BallCategory {
    pub fn random(rng: &mut SimRng) -> Self {
        let roll = uniform(rng, 0.0, 1.0);
        if roll < 0.3 {
            BallCategory::Rock
        } else if roll < 0.6 {
            BallCategory::Fruit
        } else {
            BallCategory::Other
        }
    }

    pub fn color(&self, rng: &mut SimRng) -> Vec3 {
        let (r, g, b) = match self {
            BallCategory::Rock => ((0.4, 0.6), (0.3, 0.5), (0.2, 0.4)),
            BallCategory::Fruit => ((0.7, 1.0), (0.3, 0.7), (0.0, 0.3)),
            BallCategory::Other => ((0.0, 0.5), (0.4, 0.8), (0.5, 1.0)),
        };
        Vec3::new(
            uniform(rng, r.0, r.1),
            uniform(rng, g.0, g.1),
            uniform(rng, b.0, b.1),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub size: f32,
    pub category: BallCategory,
    pub color: Vec3,
    /// Offset into the bounce cycle, in cycles.
    pub phase: f32,
    pub speed: f32,
    pub bounce_height: f32,
}

/// Where and how a ball is drawn at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallPose {
    pub center: Vec2,
    pub scale: Vec2,
    pub height: f32,
    /// Center and scale of the drop shadow, present near the ground.
    pub shadow: Option<(Vec2, Vec2)>,
}

impl Ball {
    pub fn random(rng: &mut SimRng) -> Self {
        let x = uniform(rng, -0.9 * ASPECT_RATIO, 0.9 * ASPECT_RATIO);
        let size = uniform(rng, 0.05, 0.12);
        let category = BallCategory::random(rng);
        let color = category.color(rng);
        Self {
            x,
            size,
            category,
            color,
            phase: uniform(rng, 0.0, 1.0),
            speed: uniform(rng, 0.7, 1.3),
            bounce_height: uniform(rng, 0.3, 0.7),
        }
    }

    /// Fraction of the current bounce cycle at `time` seconds.
    pub fn cycle(&self, time: f32) -> f32 {
        (time * self.speed + self.phase).rem_euclid(1.0)
    }

    pub fn pose(&self, time: f32) -> BallPose {
        let t = self.cycle(time);
        let height = bounce_ease_out(t) * self.bounce_height;
        let base = Vec2::splat(self.size);

        let stretch = 1.0 + height / 4.0;
        let deform = if t < 0.5 {
            Vec2::new(1.0 / stretch, stretch)
        } else {
            let impact = 1.0 - (t - 0.5) * 2.0;
            if impact < 0.2 {
                let squash = (0.2 - impact) / 0.2;
                Vec2::new(1.0 + squash * 0.3, 1.0 - squash * 0.3)
            } else {
                Vec2::ONE
            }
        };

        let shadow = (height < 0.4).then(|| {
            let center = Vec2::new(self.x + height * 0.1, GROUND_HEIGHT + 0.001);
            let scale = Vec2::new(self.size * (1.0 - height * 0.5), self.size * 0.2);
            (center, scale)
        });

        BallPose {
            center: Vec2::new(self.x, GROUND_HEIGHT + height),
            scale: base * deform,
            height,
            shadow,
        }
    }
}

#[derive(Clone, Debug)]
struct Cloud {
    center: Vec2,
    size: f32,
}

/// Balls bouncing over a meadow, each on its own rhythm.
pub struct BounceScene {
    balls: Vec<Ball>,
    clouds: Vec<Cloud>,
}

impl BounceScene {
    pub fn new() -> Self {
        Self::with_rng(SimRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SimRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: SimRng) -> Self {
        let clouds = (0..5)
            .map(|_| Cloud {
                center: Vec2::new(
                    uniform(&mut rng, -0.9 * ASPECT_RATIO, 0.9 * ASPECT_RATIO),
                    uniform(&mut rng, 0.2, 0.8),
                ),
                size: uniform(&mut rng, 0.1, 0.2),
            })
            .collect();
        let balls = (0..BALL_COUNT).map(|_| Ball::random(&mut rng)).collect();
        Self { balls, clouds }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    fn render_environment(&self, draw: &mut DrawList) {
        let width = 2.0 * ASPECT_RATIO;
        draw.push(ShapeInstance::rect(
            Vec2::ZERO,
            Vec2::new(width, SKY_HEIGHT),
            Vec3::new(0.3, 0.5, 0.9),
        ));
        draw.push(ShapeInstance::ellipse(
            Vec2::new(0.7 * ASPECT_RATIO, 0.7),
            Vec2::splat(0.15),
            Vec3::new(1.0, 0.9, 0.6),
        ));
        for cloud in &self.clouds {
            draw.push(ShapeInstance::ellipse(
                cloud.center,
                Vec2::new(cloud.size * 2.0, cloud.size),
                Vec3::ONE,
            ));
        }
        draw.push(ShapeInstance::rect(
            Vec2::new(0.0, GROUND_HEIGHT - 0.1),
            Vec2::new(width, 0.2),
            Vec3::new(0.2, 0.6, 0.3),
        ));
    }
}

impl Default for BounceScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for BounceScene {
    fn title(&self) -> &str {
        "Earth-like Bouncing Balls"
    }

    fn render(&mut self, application: &Application, draw: &mut DrawList) {
        self.render_environment(draw);
        let time = application.clock.elapsed();
        for ball in &self.balls {
            let pose = ball.pose(time);
            if let Some((center, scale)) = pose.shadow {
                draw.push(ShapeInstance::ellipse(center, scale, SHADOW_COLOR));
            }
            draw.push(ShapeInstance::ellipse(pose.center, pose.scale, ball.color));
        }
    }
}
