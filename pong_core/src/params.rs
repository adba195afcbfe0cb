/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 700.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    pub const PADDLE_SPACING: f32 = 20.0; // gap between paddle and its side wall
    pub const PADDLE_SPEED: f32 = 1.9; // pixels per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 2.0;
    pub const BALL_ACCELERATION: f32 = 0.1; // added every second paddle hit

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Timing
    pub const TICK_INTERVAL_MS: u64 = 10;
    pub const MAX_CATCH_UP_TICKS: u32 = 10; // Clamp to prevent large jumps

    // Presentation
    pub const PADDLE_COLOR: &'static str = "#FFFFFF";
    pub const BALL_COLOR: &'static str = "#FFFFFF";
    pub const BACKGROUND_COLOR: &'static str = "#111111";
    pub const SCORE_FONT: &'static str = "60px Arial";
    pub const PROMPT_FONT: &'static str = "30px Arial";
    pub const START_PROMPT: &'static str = "Press space to start";

    // Names
    pub const LEFT_NAME: &'static str = "Player 1";
    pub const RIGHT_NAME: &'static str = "Player 2";
    pub const BOT_NAME: &'static str = "Computer";
}
