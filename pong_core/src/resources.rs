use crate::{PaddleIntent, Side};

/// Keys the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Start,
}

impl Key {
    /// Map a host key name. With one player the arrow keys also drive the left paddle.
    pub fn from_name(name: &str, two_players: bool) -> Option<Self> {
        let key = match name {
            "w" | "W" => Key::LeftUp,
            "s" | "S" => Key::LeftDown,
            "ArrowUp" if two_players => Key::RightUp,
            "ArrowDown" if two_players => Key::RightDown,
            "ArrowUp" => Key::LeftUp,
            "ArrowDown" => Key::LeftDown,
            " " | "Space" | "Spacebar" => Key::Start,
            _ => return None,
        };
        Some(key)
    }
}

/// Held movement keys plus a pending start press
///
/// Flags are only read once per tick, so key repeat needs no filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    start: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        // Releasing space does not cancel a press that has not been consumed yet
        if key != Key::Start {
            self.set(key, false);
        }
    }

    fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::LeftUp => self.left_up = pressed,
            Key::LeftDown => self.left_down = pressed,
            Key::RightUp => self.right_up = pressed,
            Key::RightDown => self.right_down = pressed,
            Key::Start => self.start = pressed,
        }
    }

    pub fn start_pending(&self) -> bool {
        self.start
    }

    /// Consume the start press, if any
    pub fn take_start(&mut self) -> bool {
        std::mem::take(&mut self.start)
    }

    /// Movement intent for one side. Opposing keys cancel out.
    pub fn intent(&self, side: Side) -> PaddleIntent {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        PaddleIntent {
            dir: down as i8 - up as i8,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Emitted once when a side reaches the win score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Win {
    pub side: Side,
    pub name: String,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.winner = None;
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}
