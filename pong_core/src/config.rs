use std::time::Duration;

use glam::Vec2;
use serde::Deserialize;

use crate::{Params, Side};

/// Game configuration
///
/// Every field has a default from [`Params`], so a partial document only
/// overrides the values it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_spacing: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_acceleration: f32,
    pub win_score: u8,
    pub tick_interval_ms: u64,
    pub max_catch_up_ticks: u32,
    pub paddle_color: String,
    pub ball_color: String,
    pub background_color: String,
    pub score_font: String,
    pub prompt_font: String,
    pub start_prompt: String,
    pub left_name: String,
    pub right_name: String,
    pub bot_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_spacing: Params::PADDLE_SPACING,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_acceleration: Params::BALL_ACCELERATION,
            win_score: Params::WIN_SCORE,
            tick_interval_ms: Params::TICK_INTERVAL_MS,
            max_catch_up_ticks: Params::MAX_CATCH_UP_TICKS,
            paddle_color: Params::PADDLE_COLOR.to_string(),
            ball_color: Params::BALL_COLOR.to_string(),
            background_color: Params::BACKGROUND_COLOR.to_string(),
            score_font: Params::SCORE_FONT.to_string(),
            prompt_font: Params::PROMPT_FONT.to_string(),
            start_prompt: Params::START_PROMPT.to_string(),
            left_name: Params::LEFT_NAME.to_string(),
            right_name: Params::RIGHT_NAME.to_string(),
            bot_name: Params::BOT_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for an arena of the given pixel size, as reported by the host on mount
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    pub fn arena_center(&self) -> Vec2 {
        self.arena_size() * 0.5
    }

    /// Left edge of a paddle at its start position
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_spacing,
            Side::Right => self.arena_width - self.paddle_width - self.paddle_spacing,
        }
    }

    /// Highest `y` a paddle's top-left corner may take
    pub fn paddle_max_y(&self) -> f32 {
        self.arena_height - self.paddle_height
    }

    /// Anchor for a side's score text: a sixth of the width either side of centre
    pub fn score_anchor(&self, side: Side) -> Vec2 {
        let offset = self.arena_width / 6.0;
        let x = match side {
            Side::Left => self.arena_width / 2.0 - offset,
            Side::Right => self.arena_width / 2.0 + offset,
        };
        Vec2::new(x, self.arena_height / 10.0)
    }

    /// Clamp values the engine cannot run with: a match needs at least one point
    pub fn normalized(mut self) -> Self {
        self.win_score = self.win_score.max(1);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
