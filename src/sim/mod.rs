//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Host supplies a positive frame delta
//! - Serves draw from a seeded RNG only
//! - Paddles resolve in a stable order (left, then right)

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::collide;
pub use rect::Rect;
pub use state::{Ball, BallState, GameEvent, GameState, Paddle};
pub use vector::SetLength;
