use std::path::PathBuf;

/// Arcade tuning constants, in logical pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 8;
    pub const PADDLE_HEIGHT: i32 = 64;
    pub const PADDLE_SPEED: i32 = 7;

    // Ball
    pub const BALL_SIZE: i32 = 8;
    pub const SERVE_SPEED_X: i32 = 2;
    pub const SERVE_MAX_SPEED_Y: i32 = 2;
    pub const BALL_SPEED_CAP_X: i32 = 6;
    pub const BALL_SPEED_CAP_Y: i32 = 10;
    pub const HITS_PER_SPEED_UP: u32 = 1;

    // AI starts tracking once the ball is past width / divisor (min 2)
    pub const AI_DETECT_DIVISOR: i32 = 3;

    pub const WIN_SCORE: u32 = 11;

    // Frame pacing
    pub const FPS: u32 = 60;
    pub const HOLD_FRAMES: u32 = 8;
    // Toggles must outlast the OS auto-repeat delay or one hold fires twice
    pub const LATCH_HOLD_FRAMES: u32 = 40;
}

/// Runtime configuration, seeded from [`Params`] and overridden from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub ball_size: i32,
    pub serve_speed_x: i32,
    pub serve_max_speed_y: i32,
    pub ball_speed_cap_x: i32,
    pub ball_speed_cap_y: i32,
    pub hits_per_speed_up: u32,
    pub ai_detect_divisor: i32,
    pub win_score: u32,
    pub fps: u32,
    pub hold_frames: u32,
    pub latch_hold_frames: u32,
    pub scanlines: bool,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_max_speed_y: Params::SERVE_MAX_SPEED_Y,
            ball_speed_cap_x: Params::BALL_SPEED_CAP_X,
            ball_speed_cap_y: Params::BALL_SPEED_CAP_Y,
            hits_per_speed_up: Params::HITS_PER_SPEED_UP,
            ai_detect_divisor: Params::AI_DETECT_DIVISOR,
            win_score: Params::WIN_SCORE,
            fps: Params::FPS,
            hold_frames: Params::HOLD_FRAMES,
            latch_hold_frames: Params::LATCH_HOLD_FRAMES,
            scanlines: true,
            seed: None,
            log_file: default_log_path(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds between simulation ticks.
    pub fn tick_rate_ms(&self) -> u64 {
        (1000 / self.fps.max(1)).max(1) as u64
    }

    /// Highest y a paddle's top edge may reach.
    pub fn paddle_max_y(&self) -> i32 {
        self.screen_height - self.paddle_height
    }

    /// x where the AI starts chasing the ball.
    pub fn ai_detect_x(&self) -> i32 {
        self.screen_width / self.ai_detect_divisor.max(2)
    }
}

fn default_log_path() -> PathBuf {
    // Store next to the executable
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join("rwg-pong.log");
        }
    }
    PathBuf::from("rwg-pong.log")
}
