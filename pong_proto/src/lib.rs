//! Messages between the Pong engine and its host window
//!
//! Uses postcard for efficient binary serialization

use pong_core::DrawCommand;
use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

// ============================================================================
// Host -> Engine
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostMsg {
    /// Arena pixel size, sent once when the game window is mounted
    Mount { width: f32, height: f32 },

    /// Start a match from the home screen
    Start { players: u8 },

    /// Key pressed, by host key name ("w", "ArrowUp", " ", ...)
    KeyDown { key: String },

    /// Key released
    KeyUp { key: String },

    /// Play again with the same players (game over screen)
    Restart,

    /// Back to the home screen (game over screen)
    Home,

    /// Window closed; tear everything down
    Stop,
}

// ============================================================================
// Engine -> Host
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineMsg {
    /// Draw primitives for one rendered frame
    Frame { tick: u64, commands: Vec<DrawCommand> },

    /// Match over. Sent exactly once per match.
    Win {
        name: String,
        right_side: bool,
        score_left: u8,
        score_right: u8,
        ticks: u64,
    },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl HostMsg {
    /// Serialize HostMsg to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize HostMsg from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl EngineMsg {
    /// Serialize EngineMsg to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize EngineMsg from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pong_core::Config;

    #[test]
    fn test_host_msg_serialization() {
        let msg = HostMsg::KeyDown {
            key: "ArrowUp".to_string(),
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = HostMsg::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(msg, decoded);
    }

    #[test]
    fn test_frame_serialization() {
        let config = Config::new();
        let msg = EngineMsg::Frame {
            tick: 100,
            commands: vec![DrawCommand::Circle {
                center: config.arena_center(),
                radius: config.ball_radius,
                color: config.ball_color.clone(),
            }],
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        match EngineMsg::from_bytes(&bytes).expect("Deserialization should succeed") {
            EngineMsg::Frame { tick, commands } => {
                assert_eq!(tick, 100);
                assert_eq!(commands.len(), 1);
            }
            _ => panic!("Message type mismatch"),
        }
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(HostMsg::from_bytes(&[0xFF, 0xFF, 0xFF]).is_err());
    }
}
