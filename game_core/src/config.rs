use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub boundary_size: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub serve_speed: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            boundary_size: Params::BOUNDARY_SIZE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            serve_speed: Params::SERVE_SPEED,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.screen_width - self.paddle_inset,
        }
    }

    /// Y position (top edge) that vertically centers a paddle
    pub fn paddle_center_y(&self) -> f32 {
        self.screen_height / 2.0 - self.paddle_height / 2.0
    }

    /// Top-left corner that centers the ball on screen
    pub fn ball_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(
            (self.screen_width - self.ball_size) / 2.0,
            (self.screen_height - self.ball_size) / 2.0,
        )
    }

    /// Clamp paddle Y (top edge) to the playfield between the boundaries
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(
            self.boundary_size,
            self.screen_height - self.boundary_size - paddle_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 50.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 750.0, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let height = config.paddle_height;
        assert_eq!(config.clamp_paddle_y(0.0, height), 15.0);
        assert_eq!(config.clamp_paddle_y(1000.0, height), 485.0);
        let valid_y = 250.0;
        assert_eq!(config.clamp_paddle_y(valid_y, height), valid_y);
    }

    #[test]
    fn test_config_spawn_points_are_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_center_y(), 250.0);
        assert_eq!(config.ball_spawn(), glam::Vec2::new(392.5, 292.5));
    }
}
