/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (world units = pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const BOUNDARY_SIZE: f32 = 15.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 0.5; // units per tick
    pub const PADDLE_INSET: f32 = 50.0; // gap between screen edge and paddle

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const SERVE_SPEED: f32 = 0.2;
    pub const SERVE_ANGLE_MIN: u32 = 10; // degrees, inclusive
    pub const SERVE_ANGLE_MAX: u32 = 20; // degrees, exclusive

    // Bounce zones (fraction of paddle height)
    pub const ZONE_TOP: f32 = 0.2;
    pub const ZONE_SPLIT: f32 = 0.5;
    pub const ZONE_BOTTOM: f32 = 0.8;
    pub const STEEP_ANGLE: f32 = 35.0;
    pub const STEEP_SPEED: f32 = 1.0;
    pub const SHALLOW_ANGLE: f32 = 10.0;
    pub const SHALLOW_SPEED: f32 = 0.5;

    // Score
    pub const WIN_SCORE: u8 = 10;
}
