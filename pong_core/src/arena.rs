//! The arena: one ball, two paddles and the tick loop that drives them.

use std::time::Duration;

use hecs::{Entity, World};
use tracing::{debug, info};

use crate::systems::{check_winner, draw_frame, draw_start_prompt};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Controller, Events, GameRng, InputState,
    Paddle, ScoreTrack, Side, Surface, Ticker, Win,
};

/// Arena lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaState {
    /// Constructed, not yet mounted
    Idle,
    /// Start frame drawn, waiting for the start key
    AwaitingStart,
    Running,
    /// A point was just scored; motion resumes on the next tick
    Paused,
    /// Someone won. Terminal.
    Finished,
}

/// A Pong match
///
/// Ticks on a host-driven schedule. Once a side wins, the arena drops its
/// schedule and every further call is a no-op.
pub struct Arena {
    world: World,
    config: Config,
    state: ArenaState,
    two_players: bool,
    collision_counter: u32,
    events: Events,
    rng: GameRng,
    ticker: Option<Ticker>,
    ticks: u64,
    ball: Entity,
    left: Entity,
    right: Entity,
}

impl Arena {
    /// Player one is always on the keyboard; player two is either a second
    /// keyboard player or the bot.
    pub fn new(config: Config, two_players: bool) -> Self {
        Self::with_rng(config, two_players, GameRng::from_entropy())
    }

    pub fn with_rng(config: Config, two_players: bool, rng: GameRng) -> Self {
        let right = if two_players {
            Controller::Keyboard
        } else {
            Controller::Bot
        };
        Self::with_controllers(config, Controller::Keyboard, right, rng)
    }

    pub fn with_controllers(
        config: Config,
        left_controller: Controller,
        right_controller: Controller,
        mut rng: GameRng,
    ) -> Self {
        let config = config.normalized();
        let mut world = World::new();

        let right_name = match right_controller {
            Controller::Bot => config.bot_name.clone(),
            Controller::Keyboard => config.right_name.clone(),
        };
        let left_name = config.left_name.clone();
        let left = create_paddle(&mut world, Side::Left, left_name, left_controller, &config);
        let right = create_paddle(&mut world, Side::Right, right_name, right_controller, &config);

        let mut ball = Ball::new(config.ball_radius, config.ball_speed_initial);
        ball.set_start_position(config.arena_width, config.arena_height);
        ball.stop();
        ball.serve(&mut rng);
        let ball = create_ball(&mut world, ball);

        Self {
            world,
            two_players: left_controller == Controller::Keyboard
                && right_controller == Controller::Keyboard,
            config,
            state: ArenaState::Idle,
            collision_counter: 0,
            events: Events::new(),
            rng,
            ticker: None,
            ticks: 0,
            ball,
            left,
            right,
        }
    }

    /// Schedule ticking and draw the start frame. Only valid once, from `Idle`.
    pub fn mount<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.state != ArenaState::Idle {
            return false;
        }
        self.ticker = Some(Ticker::new(
            self.config.tick_interval(),
            self.config.max_catch_up_ticks,
        ));
        self.state = ArenaState::AwaitingStart;
        draw_start_prompt(&self.world, &self.config, surface);
        debug!(two_players = self.two_players, "arena mounted");
        true
    }

    /// Leave `AwaitingStart` or `Paused` and set the ball moving
    pub fn start(&mut self) -> bool {
        match self.state {
            ArenaState::AwaitingStart | ArenaState::Paused => {
                if self.state == ArenaState::AwaitingStart {
                    info!(two_players = self.two_players, "match started");
                }
                for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                    ball.reapply_speed();
                }
                self.state = ArenaState::Running;
                true
            }
            _ => false,
        }
    }

    /// One simulation step. Returns the win exactly once, on the tick it happens.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        input: &mut InputState,
        surface: &mut S,
    ) -> Option<Win> {
        self.events.clear();

        match self.state {
            ArenaState::Idle | ArenaState::Finished => return None,
            ArenaState::AwaitingStart => {
                if !input.take_start() {
                    return None;
                }
                self.start();
            }
            ArenaState::Paused => {
                input.take_start();
                self.start();
            }
            ArenaState::Running => {}
        }

        self.ticks += 1;
        let scorer = step(
            &mut self.world,
            &self.config,
            input,
            &mut self.collision_counter,
            &mut self.events,
            &mut self.rng,
        );
        if let Some(side) = scorer {
            self.state = ArenaState::Paused;
            debug!(
                ?side,
                left = self.score(Side::Left),
                right = self.score(Side::Right),
                "point scored"
            );
        }

        let win = check_winner(&self.world, self.config.win_score);
        if let Some(win) = &win {
            self.state = ArenaState::Finished;
            self.events.winner = Some(win.side);
            self.ticker = None;
            info!(side = ?win.side, name = %win.name, ticks = self.ticks, "match won");
        }

        draw_frame(&self.world, &self.config, surface);
        win
    }

    /// Run every tick that `elapsed` makes due. Does nothing unless mounted and not stopped.
    pub fn advance<S: Surface + ?Sized>(
        &mut self,
        elapsed: Duration,
        input: &mut InputState,
        surface: &mut S,
    ) -> Option<Win> {
        for _ in 0..self.due_ticks(elapsed) {
            if let Some(win) = self.tick(input, surface) {
                return Some(win);
            }
        }
        None
    }

    /// Ticks that `elapsed` makes due, for callers that run [`Arena::tick`]
    /// themselves. Zero unless mounted and not stopped.
    pub fn due_ticks(&mut self, elapsed: Duration) -> u32 {
        self.ticker.as_mut().map_or(0, |ticker| ticker.due(elapsed))
    }

    /// Cancel the tick schedule (teardown)
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            debug!(state = ?self.state, "arena stopped");
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn state(&self) -> ArenaState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        matches!(
            self.state,
            ArenaState::Idle | ArenaState::AwaitingStart | ArenaState::Paused
        )
    }

    pub fn two_players(&self) -> bool {
        self.two_players
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn collision_counter(&self) -> u32 {
        self.collision_counter
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .get::<&Paddle>(self.paddle_entity(side))
            .ok()
            .map(|paddle| Paddle::clone(&paddle))
    }

    pub fn score_track(&self, side: Side) -> Option<ScoreTrack> {
        self.world
            .get::<&ScoreTrack>(self.paddle_entity(side))
            .ok()
            .map(|score| *score)
    }

    pub fn score(&self, side: Side) -> u8 {
        self.score_track(side).map_or(0, |score| score.count())
    }

    /// Mutate the ball in place (scenario setup, host resync)
    pub fn edit_ball(&mut self, edit: impl FnOnce(&mut Ball)) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            edit(&mut *ball);
        }
    }

    /// Mutate one paddle in place
    pub fn edit_paddle(&mut self, side: Side, edit: impl FnOnce(&mut Paddle)) {
        let entity = self.paddle_entity(side);
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            edit(&mut *paddle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FrameRecorder, Key, NullSurface, Params};

    fn arena(two_players: bool) -> Arena {
        Arena::with_rng(Config::new(), two_players, GameRng::new(1))
    }

    #[test]
    fn test_new_arena_is_idle_and_still() {
        let arena = arena(false);
        assert_eq!(arena.state(), ArenaState::Idle);
        assert!(!arena.is_scheduled());
        assert!(arena.ball().unwrap().is_stopped());
        assert_eq!(arena.paddle(Side::Right).unwrap().name, Params::BOT_NAME);
    }

    #[test]
    fn test_mount_draws_prompt_once() {
        let mut arena = arena(true);
        let mut frame = FrameRecorder::new();
        assert!(arena.mount(&mut frame));
        assert_eq!(arena.state(), ArenaState::AwaitingStart);
        assert!(arena.is_scheduled());
        assert!(frame.texts().contains(&Params::START_PROMPT));
        assert!(!arena.mount(&mut frame), "Second mount is a no-op");
    }

    #[test]
    fn test_ticks_wait_for_start_key() {
        let mut arena = arena(true);
        let mut input = InputState::new();
        arena.mount(&mut NullSurface);

        assert_eq!(arena.tick(&mut input, &mut NullSurface), None);
        assert_eq!(arena.ticks(), 0);
        assert_eq!(arena.state(), ArenaState::AwaitingStart);

        input.key_down(Key::Start);
        arena.tick(&mut input, &mut NullSurface);
        assert_eq!(arena.state(), ArenaState::Running);
        assert_eq!(arena.ticks(), 1);
        assert!(!input.start_pending(), "Start consumed by the transition");
        assert!(!arena.ball().unwrap().is_stopped());
    }

    #[test]
    fn test_tick_before_mount_is_noop() {
        let mut arena = arena(true);
        let mut input = InputState::new();
        input.key_down(Key::Start);
        assert_eq!(arena.tick(&mut input, &mut NullSurface), None);
        assert_eq!(arena.state(), ArenaState::Idle);
    }

    #[test]
    fn test_stop_cancels_schedule() {
        let mut arena = arena(true);
        let mut input = InputState::new();
        arena.mount(&mut NullSurface);
        arena.start();
        arena.stop();
        assert!(!arena.is_scheduled());
        arena.advance(Duration::from_secs(1), &mut input, &mut NullSurface);
        assert_eq!(arena.ticks(), 0);
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut arena = arena(true);
        let mut input = InputState::new();
        arena.mount(&mut NullSurface);
        arena.start();
        arena.advance(Duration::from_millis(35), &mut input, &mut NullSurface);
        assert_eq!(arena.ticks(), 3);
    }

    #[test]
    fn test_due_ticks_needs_a_schedule() {
        let mut arena = arena(true);
        assert_eq!(arena.due_ticks(Duration::from_millis(30)), 0);
        arena.mount(&mut NullSurface);
        assert_eq!(arena.due_ticks(Duration::from_millis(30)), 3);
        arena.stop();
        assert_eq!(arena.due_ticks(Duration::from_millis(30)), 0);
    }

    #[test]
    fn test_zero_win_score_does_not_end_at_nil_nil() {
        let config = Config {
            win_score: 0,
            ..Config::new()
        };
        let mut arena = Arena::with_rng(config, true, GameRng::new(1));
        let mut input = InputState::new();
        arena.mount(&mut NullSurface);
        input.key_down(Key::Start);
        assert_eq!(arena.tick(&mut input, &mut NullSurface), None);
        assert_eq!(arena.state(), ArenaState::Running);
        assert_eq!(arena.config().win_score, 1);
    }

    #[test]
    fn test_keyboard_moves_left_paddle_within_bounds() {
        let mut arena = arena(true);
        let mut input = InputState::new();
        arena.mount(&mut NullSurface);
        arena.start();
        input.key_down(Key::LeftUp);
        for _ in 0..500 {
            arena.tick(&mut input, &mut NullSurface);
            let paddle = arena.paddle(Side::Left).unwrap();
            assert!(paddle.pos.y >= 0.0);
            if arena.state() == ArenaState::Finished {
                break;
            }
        }
    }
}
