/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 1080.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_SPEED: f32 = 8.0; // units per frame
    pub const PADDLE_INSET: f32 = 15.0; // gap between paddle and its edge

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED: f32 = 7.0; // units per frame, per axis

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Timing
    pub const MISS_COOLDOWN: f64 = 2.0; // seconds the ball stays parked after a point
    pub const TARGET_FPS: u32 = 90;
}
