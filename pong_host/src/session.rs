use std::time::Duration;

use pong_core::{Arena, Config, Controller, FrameRecorder, GameRng, InputState, Key, Side, Win};
use pong_proto::{EngineMsg, HostMsg};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::HostError;

/// What the game over screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOverSummary {
    pub winner: String,
    pub right_side: bool,
    pub score_left: u8,
    pub score_right: u8,
    pub ticks: u64,
}

/// One game window: home screen, a running arena, game over screen
///
/// Feed it host messages, advance it with elapsed time, and drain the
/// frames and win messages it produces.
pub struct Session {
    config: Config,
    fsm: GameFsm,
    players: u8,
    demo: bool,
    seed: Option<u64>,
    arena: Option<Arena>,
    input: InputState,
    frame: FrameRecorder,
    outbox: Vec<EngineMsg>,
    summary: Option<GameOverSummary>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            fsm: GameFsm::new(),
            players: 1,
            demo: false,
            seed: None,
            arena: None,
            input: InputState::new(),
            frame: FrameRecorder::new(),
            outbox: Vec::new(),
            summary: None,
        }
    }

    /// Fixed serve sequence, for reproducible sessions
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(config)
        }
    }

    /// Both paddles driven by the bot
    pub fn demo(config: Config) -> Self {
        Self {
            demo: true,
            ..Self::new(config)
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn is_playing(&self) -> bool {
        self.fsm.is_playing()
    }

    pub fn is_game_over(&self) -> bool {
        self.fsm.is_game_over()
    }

    pub fn players(&self) -> u8 {
        self.players
    }

    pub fn arena(&self) -> Option<&Arena> {
        self.arena.as_ref()
    }

    pub fn arena_mut(&mut self) -> Option<&mut Arena> {
        self.arena.as_mut()
    }

    pub fn summary(&self) -> Option<&GameOverSummary> {
        self.summary.as_ref()
    }

    pub fn handle(&mut self, msg: HostMsg) {
        match msg {
            HostMsg::Mount { width, height } => {
                self.config.arena_width = width;
                self.config.arena_height = height;
                debug!(width, height, "arena size set");
            }
            HostMsg::Start { players } => {
                if self.fsm.transition(GameAction::StartGame).success {
                    self.players = players.clamp(1, 2);
                    self.open_arena();
                }
            }
            HostMsg::KeyDown { key } => {
                if let Some(key) = self.key(&key) {
                    self.input.key_down(key);
                }
            }
            HostMsg::KeyUp { key } => {
                if let Some(key) = self.key(&key) {
                    self.input.key_up(key);
                }
            }
            HostMsg::Restart => {
                if self.fsm.transition(GameAction::Restart).success {
                    self.open_arena();
                }
            }
            HostMsg::Home => {
                if self.fsm.transition(GameAction::Home).success {
                    self.close_arena();
                    self.players = 1;
                }
            }
            HostMsg::Stop => {
                if self.fsm.transition(GameAction::Close).success {
                    self.close_arena();
                }
            }
        }
    }

    pub fn handle_bytes(&mut self, bytes: &[u8]) -> Result<(), HostError> {
        let msg = HostMsg::from_bytes(bytes)?;
        self.handle(msg);
        Ok(())
    }

    /// Run the ticks `elapsed` makes due, queueing one frame per drawn tick
    pub fn advance(&mut self, elapsed: Duration) {
        let Some(arena) = self.arena.as_mut() else {
            return;
        };

        let mut win = None;
        for _ in 0..arena.due_ticks(elapsed) {
            win = arena.tick(&mut self.input, &mut self.frame);
            if !self.frame.is_empty() {
                self.outbox.push(EngineMsg::Frame {
                    tick: arena.ticks(),
                    commands: self.frame.take(),
                });
            }
            if win.is_some() {
                break;
            }
        }

        if let Some(win) = win {
            self.finish(win);
        }
    }

    /// Take every queued message
    pub fn drain(&mut self) -> Vec<EngineMsg> {
        std::mem::take(&mut self.outbox)
    }

    pub fn drain_bytes(&mut self) -> Result<Vec<Vec<u8>>, HostError> {
        let mut out = Vec::new();
        for msg in self.drain() {
            out.push(msg.to_bytes()?);
        }
        Ok(out)
    }

    fn key(&self, name: &str) -> Option<Key> {
        let two_players = self.arena.as_ref().is_some_and(Arena::two_players);
        Key::from_name(name, two_players)
    }

    fn open_arena(&mut self) {
        let (left, right) = if self.demo {
            (Controller::Bot, Controller::Bot)
        } else if self.players == 2 {
            (Controller::Keyboard, Controller::Keyboard)
        } else {
            (Controller::Keyboard, Controller::Bot)
        };
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut arena = Arena::with_controllers(self.config.clone(), left, right, rng);
        self.input = InputState::new();
        self.summary = None;
        arena.mount(&mut self.frame);
        self.outbox.push(EngineMsg::Frame {
            tick: 0,
            commands: self.frame.take(),
        });
        if self.demo {
            arena.start();
        }
        info!(players = self.players, demo = self.demo, "arena opened");
        self.arena = Some(arena);
    }

    fn close_arena(&mut self) {
        if let Some(mut arena) = self.arena.take() {
            arena.stop();
        }
        self.input = InputState::new();
    }

    fn finish(&mut self, win: Win) {
        let Some(arena) = self.arena.take() else {
            warn!("win without an arena");
            return;
        };
        let summary = GameOverSummary {
            winner: win.name.clone(),
            right_side: win.side == Side::Right,
            score_left: arena.score(Side::Left),
            score_right: arena.score(Side::Right),
            ticks: arena.ticks(),
        };
        self.outbox.push(EngineMsg::Win {
            name: summary.winner.clone(),
            right_side: summary.right_side,
            score_left: summary.score_left,
            score_right: summary.score_right,
            ticks: summary.ticks,
        });
        self.fsm.transition(GameAction::Win);
        info!(winner = %summary.winner, ticks = summary.ticks, "game over");
        self.summary = Some(summary);
    }
}
