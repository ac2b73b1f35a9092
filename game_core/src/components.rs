use glam::Vec2;

use crate::{bounce_vector, Config, GameRng, Params};

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

impl Controller {
    /// The AI defends the left side, the human the right
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Controller::Ai,
            Side::Right => Controller::Human,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed after init
    pub y: f32, // Top edge (clamped to playfield)
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    /// Paddle at its starting spot, vertically centered
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_center_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn reset(&mut self, config: &Config) {
        *self = Self::new(self.side, config);
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner of the square hitbox
    pub vel: Vec2, // Units per tick
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Reset ball to center and serve it in a random diagonal direction
    pub fn serve(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.size = config.ball_size;
        self.pos = config.ball_spawn();

        // Whole degrees in [10, 20), either horizontal and vertical direction
        let angle = rng.0.gen_range(Params::SERVE_ANGLE_MIN..Params::SERVE_ANGLE_MAX);
        let mut vel = bounce_vector(angle as f32, config.serve_speed);
        if rng.0.gen_bool(0.5) {
            vel.x = -vel.x;
        }
        if rng.0.gen_bool(0.5) {
            vel.y = -vel.y;
        }

        self.vel = vel;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
