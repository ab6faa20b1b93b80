use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub win_score: u8,
    pub miss_cooldown: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
            miss_cooldown: Params::MISS_COOLDOWN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of the paddle for the given side
    pub fn paddle_x(&self, side: Side, arena_width: f32) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => arena_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Top edge of a paddle centred vertically in the arena
    pub fn paddle_start_y(&self, arena_height: f32) -> f32 {
        arena_height / 2.0 - self.paddle_height / 2.0
    }
}
