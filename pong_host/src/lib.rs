//! Headless host for the Pong engine
//!
//! Drives an arena through the home / playing / game over flow and turns
//! its output into postcard messages for whatever window is attached.

pub mod config;
pub mod error;
pub mod fsm;
pub mod session;

pub use config::*;
pub use error::*;
pub use fsm::*;
pub use session::*;
