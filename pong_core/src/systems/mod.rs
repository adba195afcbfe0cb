pub mod collision;
pub mod draw;
pub mod input;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use draw::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
