/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (fallback when no canvas size is known)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side edge

    // Ball
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED: f32 = 5.0; // pixels per frame
    pub const ENGLISH_FACTOR: f32 = 0.1; // vy gained per pixel of off-center hit

    // Opponent
    pub const AI_SPEED: f32 = 4.0; // pixels per frame
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Drawing
    pub const COLOR: &str = "#fff";
    pub const CENTER_LINE_DASH: [f32; 2] = [8.0, 12.0]; // dash, gap
}
