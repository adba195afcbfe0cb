use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{bot_intent, Config, GameRng, InputState};

/// Which half of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalDir {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalDir {
    Left,
    Right,
}

/// Ball component - the pong ball
///
/// Velocity components are always `±speed` except while stopped. The
/// direction labels always agree with the velocity signs they were set with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub vertical: VerticalDir,
    pub horizontal: HorizontalDir,
}

impl Ball {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(speed, speed),
            radius,
            speed,
            vertical: VerticalDir::Down,
            horizontal: HorizontalDir::Right,
        }
    }

    /// Advance by one tick of velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn set_start_position(&mut self, arena_width: f32, arena_height: f32) {
        self.pos = Vec2::new(arena_width / 2.0, arena_height / 2.0);
    }

    /// Bump the speed scalar. Velocity picks it up on the next direction change.
    pub fn accelerate(&mut self, amount: f32) {
        self.speed += amount;
    }

    pub fn reset_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn move_up(&mut self) {
        self.vel.y = -self.speed;
        self.vertical = VerticalDir::Up;
    }

    pub fn move_down(&mut self) {
        self.vel.y = self.speed;
        self.vertical = VerticalDir::Down;
    }

    pub fn move_left(&mut self) {
        self.vel.x = -self.speed;
        self.horizontal = HorizontalDir::Left;
    }

    pub fn move_right(&mut self) {
        self.vel.x = self.speed;
        self.horizontal = HorizontalDir::Right;
    }

    pub fn flip_vertical(&mut self) {
        match self.vertical {
            VerticalDir::Up => self.move_down(),
            VerticalDir::Down => self.move_up(),
        }
    }

    pub fn flip_horizontal(&mut self) {
        match self.horizontal {
            HorizontalDir::Left => self.move_right(),
            HorizontalDir::Right => self.move_left(),
        }
    }

    /// Re-derive both velocity components from the labels and current speed
    pub fn reapply_speed(&mut self) {
        match self.vertical {
            VerticalDir::Up => self.move_up(),
            VerticalDir::Down => self.move_down(),
        }
        match self.horizontal {
            HorizontalDir::Left => self.move_left(),
            HorizontalDir::Right => self.move_right(),
        }
    }

    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
    }

    pub fn is_stopped(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Pick a random diagonal. Velocity stays at zero if the ball was stopped;
    /// only the labels change until [`Ball::reapply_speed`] runs.
    pub fn serve(&mut self, rng: &mut GameRng) {
        self.horizontal = if rng.0.gen_bool(0.5) {
            HorizontalDir::Right
        } else {
            HorizontalDir::Left
        };
        self.vertical = if rng.0.gen_bool(0.5) {
            VerticalDir::Down
        } else {
            VerticalDir::Up
        };
        if !self.is_stopped() {
            self.reapply_speed();
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Paddle component - represents a player's paddle
///
/// `pos` is the top-left corner. The paddle never clamps itself; callers
/// check [`Paddle::can_move`] first.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub side: Side,
    pub name: String,
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, name: impl Into<String>, config: &Config) -> Self {
        let mut paddle = Self {
            pos: Vec2::ZERO,
            width: config.paddle_width,
            height: config.paddle_height,
            side,
            name: name.into(),
            speed: config.paddle_speed,
        };
        paddle.set_start_position(config);
        paddle
    }

    /// Horizontal edge spacing from its own wall, vertically centred
    pub fn set_start_position(&mut self, config: &Config) {
        self.pos = Vec2::new(
            config.paddle_x(self.side),
            config.arena_height / 2.0 - self.height / 2.0,
        );
    }

    pub fn move_up(&mut self) {
        self.pos.y -= self.speed;
    }

    pub fn move_down(&mut self) {
        self.pos.y += self.speed;
    }

    /// Whether moving one step in `dir` keeps the paddle inside `[0, arena_height - height]`
    pub fn can_move(&self, dir: i8, arena_height: f32) -> bool {
        let next = self.pos.y + dir as f32 * self.speed;
        next >= 0.0 && next + self.height <= arena_height
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Lower limit of the top edge zone (outer third)
    pub fn top_edge(&self) -> f32 {
        self.top() + self.height / 3.0
    }

    /// Upper limit of the bottom edge zone (outer third)
    pub fn bottom_edge(&self) -> f32 {
        self.bottom() - self.height / 3.0
    }

    /// X of the face that meets the ball
    pub fn contact_x(&self) -> f32 {
        match self.side {
            Side::Left => self.pos.x + self.width,
            Side::Right => self.pos.x,
        }
    }

    /// Whether a vertical span `[top, bottom]` overlaps the paddle
    pub fn overlaps(&self, top: f32, bottom: f32) -> bool {
        bottom >= self.top() && top <= self.bottom()
    }
}

/// Points for one side, drawn at `anchor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTrack {
    pub count: u8,
    pub anchor: Vec2,
}

impl ScoreTrack {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            count: 0,
            anchor: config.score_anchor(side),
        }
    }

    pub fn add_point(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub const UP: Self = Self { dir: -1 };
    pub const DOWN: Self = Self { dir: 1 };
    pub const STOP: Self = Self { dir: 0 };

    pub fn new() -> Self {
        Self::default()
    }
}

/// What steers a paddle each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Reads the side's keys from [`InputState`]
    Keyboard,
    /// Follows the ball with [`bot_intent`]
    Bot,
}

impl Controller {
    pub fn intent(
        &self,
        input: &InputState,
        ball: &Ball,
        paddle: &Paddle,
        arena_height: f32,
    ) -> PaddleIntent {
        match self {
            Controller::Keyboard => input.intent(paddle.side),
            Controller::Bot => bot_intent(
                ball.pos.y,
                ball.radius,
                paddle,
                ball.vertical,
                arena_height,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_axes_are_independent() {
        let mut ball = Ball::new(10.0, 2.0);
        ball.move_left();
        ball.move_up();
        assert_eq!(ball.vel, Vec2::new(-2.0, -2.0));
        ball.move_down();
        assert_eq!(ball.vel.x, -2.0, "Vertical setter must not touch x");
        assert_eq!(ball.horizontal, HorizontalDir::Left);
        assert_eq!(ball.vertical, VerticalDir::Down);
    }

    #[test]
    fn test_ball_accelerate_applies_on_next_setter() {
        let mut ball = Ball::new(10.0, 2.0);
        ball.move_right();
        ball.accelerate(0.1);
        assert_eq!(ball.vel.x, 2.0, "Velocity unchanged until a setter runs");
        ball.move_left();
        assert!((ball.vel.x + 2.1).abs() < 1e-6);
    }

    #[test]
    fn test_ball_stop_and_reapply() {
        let mut ball = Ball::new(10.0, 2.0);
        ball.move_left();
        ball.move_up();
        ball.stop();
        assert!(ball.is_stopped());
        ball.reapply_speed();
        assert_eq!(ball.vel, Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn test_ball_start_position_is_center() {
        let mut ball = Ball::new(10.0, 2.0);
        ball.set_start_position(700.0, 400.0);
        assert_eq!(ball.pos, Vec2::new(350.0, 200.0));
    }

    #[test]
    fn test_ball_serve_keeps_labels_consistent() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(10.0, 2.0);
        for _ in 0..20 {
            ball.serve(&mut rng);
            assert_eq!(ball.vel.x > 0.0, ball.horizontal == HorizontalDir::Right);
            assert_eq!(ball.vel.y > 0.0, ball.vertical == VerticalDir::Down);
        }
    }

    #[test]
    fn test_ball_serve_while_stopped_stays_stopped() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(10.0, 2.0);
        ball.stop();
        ball.serve(&mut rng);
        assert!(ball.is_stopped());
    }

    #[test]
    fn test_paddle_start_position() {
        let config = Config::new();
        let left = Paddle::new(Side::Left, "L", &config);
        let right = Paddle::new(Side::Right, "R", &config);
        assert_eq!(left.pos, Vec2::new(20.0, 185.0));
        assert_eq!(right.pos, Vec2::new(670.0, 185.0));
    }

    #[test]
    fn test_paddle_contact_plane_per_side() {
        let config = Config::new();
        let left = Paddle::new(Side::Left, "L", &config);
        let right = Paddle::new(Side::Right, "R", &config);
        assert_eq!(left.contact_x(), 30.0);
        assert_eq!(right.contact_x(), 670.0);
    }

    #[test]
    fn test_paddle_edge_zones_are_outer_thirds() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, "L", &config);
        paddle.pos.y = 60.0;
        assert_eq!(paddle.top_edge(), 70.0);
        assert_eq!(paddle.bottom_edge(), 80.0);
    }

    #[test]
    fn test_paddle_does_not_clamp_itself() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, "L", &config);
        paddle.pos.y = 1.0;
        assert!(!paddle.can_move(-1, config.arena_height));
        paddle.move_up();
        assert!(paddle.pos.y < 0.0);
    }

    #[test]
    fn test_score_track_counts_up() {
        let config = Config::new();
        let mut score = ScoreTrack::new(Side::Right, &config);
        assert_eq!(score.count(), 0);
        score.add_point();
        score.add_point();
        assert_eq!(score.count(), 2);
        assert_eq!(score.anchor(), config.score_anchor(Side::Right));
    }
}
