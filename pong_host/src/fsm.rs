//! Game window state machine
//!
//! Home screen, a match in progress, and the game over screen with its
//! restart and home buttons.

/// Window states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Home,
    Playing,
    GameOver,
    Closed,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    StartGame,
    Win,
    Restart,
    Home,
    Close,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Game window finite state machine
#[derive(Debug)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Home,
        }
    }

    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Closed, _) => None,
            (_, GameAction::Close) => Some(FsmState::Closed),

            (FsmState::Home, GameAction::StartGame) => Some(FsmState::Playing),

            (FsmState::Playing, GameAction::Win) => Some(FsmState::GameOver),
            (FsmState::Playing, GameAction::Home) => Some(FsmState::Home),

            (FsmState::GameOver, GameAction::Restart) => Some(FsmState::Playing),
            (FsmState::GameOver, GameAction::Home) => Some(FsmState::Home),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == FsmState::GameOver
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
