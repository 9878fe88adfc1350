//! Classic Pong - one human paddle against a ball-tracking AI
//!
//! Core modules:
//! - `sim`: Simulation (vectors, boxes, entities, collisions, scoring)
//! - `renderer`: Drawing contract, score glyphs, software framebuffer
//! - `platform`: Host helpers (frame clock, pointer mapping)
//! - `settings`: Presentation and host settings
//! - `game`: Facade tying the simulation to a render surface

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Pong;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Ball is a 10x10 square
    pub const BALL_SIZE: f32 = 10.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Horizontal distance from the surface edge to a paddle center
    pub const PADDLE_MARGIN: f32 = 40.0;

    /// Speed of every fresh serve (units/s)
    pub const INITIAL_SPEED: f32 = 250.0;
    /// Raw serve component magnitude before normalizing to `INITIAL_SPEED`
    pub const SERVE_COMPONENT: f32 = 200.0;

    /// Horizontal reflection factor on paddle hit (reverses and speeds up)
    pub const PADDLE_BOOST: f32 = -1.05;
    /// Share of paddle vertical velocity transferred to the ball
    pub const PADDLE_SPIN: f32 = 0.2;

    /// Score glyph grid (cells)
    pub const CHAR_COLS: usize = 3;
    pub const CHAR_ROWS: usize = 5;
    /// Default size of one glyph cell in pixels
    pub const CHAR_PIXEL: u32 = 10;
    /// Largest accepted glyph cell
    pub const MAX_CHAR_PIXEL: u32 = 64;
    /// Largest accepted native framebuffer side
    pub const MAX_SURFACE_SIDE: u32 = 8192;
    /// Distance from the top of the surface to the score glyphs
    pub const SCORE_TOP: f32 = 20.0;
}
