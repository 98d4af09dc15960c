use glam::{Vec2, Vec3};
use phenomena_core::emitter::uniform;
use phenomena_core::SimRng;
use rand::SeedableRng;

use crate::application::Application;
use crate::demo::Demo;
use crate::input::Key;
use crate::render::{DrawList, ShapeInstance};

const PADDLE_START: Vec2 = Vec2::new(0.0, -0.9);
const PADDLE_SIZE: Vec2 = Vec2::new(0.2, 0.03);
const PADDLE_STEP: f32 = 0.03;
const BALL_START: Vec2 = Vec2::new(0.0, -0.7);
const BALL_SIZE: f32 = 0.02;
const BALL_SPEED: f32 = 0.01;
const BRICK_SIZE: Vec2 = Vec2::new(0.1, 0.04);
const BRICK_GAP: f32 = 0.02;
const BRICK_ROWS: usize = 5;
const BRICK_COLUMNS: usize = 8;
const MAX_BOUNCE_ANGLE: f32 = 60.0;

const ROW_COLORS: [Vec3; BRICK_ROWS] = [
    Vec3::new(1.0, 0.2, 0.2),
    Vec3::new(1.0, 0.6, 0.2),
    Vec3::new(1.0, 1.0, 0.2),
    Vec3::new(0.2, 1.0, 0.2),
    Vec3::new(0.2, 0.4, 1.0),
];

/// Axis-aligned rectangle given by its center and full size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.size * 0.5
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.size * 0.5
    }

    /// Touching edges count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_max.x >= b_min.x && b_max.x >= a_min.x && a_max.y >= b_min.y && b_max.y >= a_min.y
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Brick {
    pub rect: Rect,
    pub color: Vec3,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Over,
}

/// What a single simulation step ran into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub wall: bool,
    pub paddle: bool,
    pub brick: Option<usize>,
    pub lost: bool,
}

/// Single-screen brick breaker in normalized device coordinates.
pub struct Breakout {
    paddle: Rect,
    ball: Rect,
    velocity: Vec2,
    bricks: Vec<Brick>,
    state: RoundState,
    rng: SimRng,
}

impl Breakout {
    pub fn new() -> Self {
        Self::with_rng(SimRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SimRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SimRng) -> Self {
        let mut game = Self {
            paddle: Rect::new(PADDLE_START, PADDLE_SIZE),
            ball: Rect::new(BALL_START, Vec2::splat(BALL_SIZE)),
            velocity: Vec2::ZERO,
            bricks: Vec::new(),
            state: RoundState::Playing,
            rng,
        };
        game.new_round();
        game
    }

    pub fn build_bricks() -> Vec<Brick> {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLUMNS);
        for (row, color) in ROW_COLORS.iter().enumerate() {
            for column in 0..BRICK_COLUMNS {
                let center = Vec2::new(
                    -0.9 + column as f32 * (BRICK_SIZE.x + BRICK_GAP),
                    0.7 - row as f32 * (BRICK_SIZE.y + BRICK_GAP),
                );
                bricks.push(Brick {
                    rect: Rect::new(center, BRICK_SIZE),
                    color: *color,
                    active: true,
                });
            }
        }
        bricks
    }

    /// Fresh bricks, centred paddle and a newly served ball.
    pub fn new_round(&mut self) {
        self.paddle = Rect::new(PADDLE_START, PADDLE_SIZE);
        self.bricks = Self::build_bricks();
        self.serve();
        self.state = RoundState::Playing;
    }

    /// Puts the ball back at its start, heading up within 45° of vertical.
    pub fn serve(&mut self) {
        self.ball = Rect::new(BALL_START, Vec2::splat(BALL_SIZE));
        let angle = uniform(&mut self.rng, -45.0, 45.0).to_radians();
        self.velocity = Vec2::new(BALL_SPEED * angle.sin(), BALL_SPEED);
    }

    /// Moves the paddle horizontally by `direction` steps, keeping it on screen.
    pub fn move_paddle(&mut self, direction: f32) {
        let half = self.paddle.size.x * 0.5;
        self.paddle.center.x =
            (self.paddle.center.x + direction * PADDLE_STEP).clamp(-1.0 + half, 1.0 - half);
    }

    /// Advances the ball by one step and resolves its collisions.
    pub fn step(&mut self) -> StepEvents {
        let mut events = StepEvents::default();
        if self.state == RoundState::Over {
            return events;
        }
        self.ball.center += self.velocity;

        if self.ball.min().x < -1.0 || self.ball.max().x > 1.0 {
            self.velocity.x = -self.velocity.x;
            events.wall = true;
        }
        if self.ball.max().y > 1.0 {
            self.velocity.y = -self.velocity.y;
            events.wall = true;
        }

        if self.ball.overlaps(&self.paddle) {
            let offset = (self.ball.center.x - self.paddle.center.x) / (self.paddle.size.x * 0.5);
            let angle = (offset * MAX_BOUNCE_ANGLE)
                .clamp(-MAX_BOUNCE_ANGLE, MAX_BOUNCE_ANGLE)
                .to_radians();
            let speed = self.velocity.length();
            self.velocity = Vec2::new(speed * angle.sin(), (speed * angle.cos()).abs());
            events.paddle = true;
        }

        if let Some((index, brick)) = self
            .bricks
            .iter_mut()
            .enumerate()
            .find(|(_, brick)| brick.active && brick.rect.overlaps(&self.ball))
        {
            brick.active = false;
            self.velocity.y = -self.velocity.y;
            events.brick = Some(index);
        }

        if self.ball.min().y < -1.0 {
            self.state = RoundState::Over;
            events.lost = true;
            log::info!("Ball lost, round over. Press R for a new round");
        } else if self.bricks.iter().all(|brick| !brick.active) {
            log::info!("All bricks cleared, starting over");
            self.new_round();
        }
        events
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn paddle(&self) -> Rect {
        self.paddle
    }

    pub fn ball(&self) -> Rect {
        self.ball
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|brick| brick.active).count()
    }
}

impl Default for Breakout {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for Breakout {
    fn title(&self) -> &str {
        "Breakout"
    }

    fn handle_key(&mut self, _application: &mut Application, key: Key) {
        if key == Key::R {
            self.new_round();
        }
    }

    fn update(&mut self, application: &Application) {
        if self.state == RoundState::Over {
            return;
        }
        if application.is_held(Key::Left) {
            self.move_paddle(-1.0);
        }
        if application.is_held(Key::Right) {
            self.move_paddle(1.0);
        }
        self.step();
    }

    fn render(&mut self, _application: &Application, draw: &mut DrawList) {
        draw.push(ShapeInstance::rect(
            self.paddle.center,
            self.paddle.size,
            Vec3::new(0.2, 0.6, 1.0),
        ));
        draw.push(ShapeInstance::rect(self.ball.center, self.ball.size, Vec3::ONE));
        for brick in self.bricks.iter().filter(|brick| brick.active) {
            draw.push(ShapeInstance::rect(brick.rect.center, brick.rect.size, brick.color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Breakout {
        let mut game = Breakout::with_seed(5);
        game.bricks.clear();
        game.bricks.push(Brick {
            rect: Rect::new(Vec2::new(0.5, 0.5), BRICK_SIZE),
            color: Vec3::ONE,
            active: false,
        });
        game
    }

    #[test]
    fn overlap_includes_touching_edges() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(1.0));
        let touching = Rect::new(Vec2::new(1.0, 0.0), Vec2::splat(1.0));
        let apart = Rect::new(Vec2::new(1.1, 0.0), Vec2::splat(1.0));
        assert!(a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn layout_has_five_rows_of_eight() {
        let bricks = Breakout::build_bricks();
        assert_eq!(bricks.len(), 40);
        assert_eq!(bricks[0].rect.center, Vec2::new(-0.9, 0.7));
        assert!((bricks[39].rect.center - Vec2::new(-0.9 + 7.0 * 0.12, 0.7 - 4.0 * 0.06)).length() < 1e-6);
        assert_eq!(bricks[0].color, ROW_COLORS[0]);
        assert_eq!(bricks[39].color, ROW_COLORS[4]);
    }

    #[test]
    fn serve_heads_upwards_within_45_degrees() {
        let mut game = Breakout::with_seed(9);
        for _ in 0..50 {
            game.serve();
            let velocity = game.velocity();
            assert_eq!(velocity.y, BALL_SPEED);
            assert!(velocity.x.abs() <= BALL_SPEED * 45f32.to_radians().sin() + 1e-7);
        }
    }

    #[test]
    fn centre_paddle_hit_sends_ball_straight_up() {
        let mut game = game();
        game.ball.center = Vec2::new(0.0, -0.87);
        game.velocity = Vec2::new(0.0, -BALL_SPEED);
        let events = game.step();
        assert!(events.paddle);
        assert!(game.velocity().x.abs() < 1e-7);
        assert!((game.velocity().y - BALL_SPEED).abs() < 1e-7);
    }

    #[test]
    fn edge_paddle_hit_is_capped_at_sixty_degrees() {
        let mut game = game();
        game.ball.center = Vec2::new(0.105, -0.87);
        game.velocity = Vec2::new(0.0, -BALL_SPEED);
        game.step();
        let angle = game.velocity().x.atan2(game.velocity().y).to_degrees();
        assert!((angle - 60.0).abs() < 1e-3);
        assert!(game.velocity().y > 0.0);
    }

    #[test]
    fn only_one_brick_breaks_per_step() {
        let mut game = game();
        let stacked = Brick {
            rect: Rect::new(Vec2::new(0.3, 0.3), BRICK_SIZE),
            color: Vec3::ONE,
            active: true,
        };
        game.bricks = vec![stacked.clone(), stacked];
        game.ball.center = Vec2::new(0.3, 0.3);
        game.velocity = Vec2::ZERO;
        let events = game.step();
        assert_eq!(events.brick, Some(0));
        assert_eq!(game.active_bricks(), 1);
    }

    #[test]
    fn brick_hit_reflects_vertical_velocity() {
        let mut game = game();
        game.bricks[0].active = true;
        game.ball.center = Vec2::new(0.5, 0.47);
        game.velocity = Vec2::new(0.002, BALL_SPEED);
        game.bricks.push(Brick {
            rect: Rect::new(Vec2::new(-0.5, -0.5), BRICK_SIZE),
            color: Vec3::ONE,
            active: true,
        });
        let events = game.step();
        assert_eq!(events.brick, Some(0));
        assert!(!game.bricks()[0].active);
        assert_eq!(game.velocity().y, -BALL_SPEED);
    }

    #[test]
    fn losing_the_ball_ends_the_round() {
        let mut game = game();
        game.ball.center = Vec2::new(0.8, -0.985);
        game.velocity = Vec2::new(0.0, -BALL_SPEED);
        let events = game.step();
        assert!(events.lost);
        assert_eq!(game.state(), RoundState::Over);
        let frozen = game.ball();
        game.step();
        assert_eq!(game.ball(), frozen);

        game.new_round();
        assert_eq!(game.state(), RoundState::Playing);
        assert_eq!(game.active_bricks(), 40);
    }

    #[test]
    fn paddle_stays_on_screen() {
        let mut game = game();
        for _ in 0..100 {
            game.move_paddle(-1.0);
        }
        assert!((game.paddle().min().x - -1.0).abs() < 1e-6);
        for _ in 0..100 {
            game.move_paddle(1.0);
        }
        assert!((game.paddle().max().x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clearing_the_wall_starts_over() {
        let mut game = game();
        game.bricks[0].active = true;
        game.paddle.center.x = 0.6;
        game.ball.center = Vec2::new(0.5, 0.5);
        game.velocity = Vec2::ZERO;
        let events = game.step();
        assert_eq!(events.brick, Some(0));
        assert_eq!(game.active_bricks(), 40);
        assert_eq!(game.paddle().center, PADDLE_START);
        assert_eq!(game.ball().center, BALL_START);
        assert_eq!(game.velocity().y, BALL_SPEED);
        assert_eq!(game.state(), RoundState::Playing);
    }
}
