//! Game state and core simulation types
//!
//! One ball, two paddles, and the surface geometry they live in. Everything
//! here is plain data owned by `GameState`; the per-frame step lives in
//! `tick.rs` and the paddle/ball response in `collision.rs`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::vector::SetLength;
use crate::consts::*;

/// Whether the ball is waiting for a serve or moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Velocity is exactly zero; `play()` will serve
    AtRest,
    /// Ball is moving; only a score brings it back to rest
    InPlay,
}

/// Something noteworthy that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// `player` won a point and now has `score`
    Scored { player: usize, score: u32 },
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball was returned by `player`'s paddle and now travels at `speed`
    PaddleHit { player: usize, speed: f32 },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            rect: Rect::new(BALL_SIZE, BALL_SIZE),
            vel: Vec2::ZERO,
        }
    }
}

impl Ball {
    pub fn state(&self) -> BallState {
        if self.vel == Vec2::ZERO {
            BallState::AtRest
        } else {
            BallState::InPlay
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Derived from frame-to-frame displacement; only feeds ball spin
    pub vel: Vec2,
    pub score: u32,
    /// Vertical position seen by the previous `update`
    last_y: f32,
}

impl Paddle {
    /// Create a paddle centered on `pos`, at rest
    pub fn new(pos: Vec2) -> Self {
        Self {
            rect: Rect::at(pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
            vel: Vec2::ZERO,
            score: 0,
            last_y: pos.y,
        }
    }

    /// Derive vertical velocity from movement since the previous call.
    ///
    /// Call once per frame, after any repositioning for that frame. `dt` must
    /// be positive.
    pub fn update(&mut self, dt: f32) {
        self.vel.y = (self.rect.pos.y - self.last_y) / dt;
        self.last_y = self.rect.pos.y;
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Surface width the court is laid out on
    pub width: f32,
    /// Surface height
    pub height: f32,
    /// Speed of every serve
    pub initial_speed: f32,
    pub ball: Ball,
    /// Index 0 = left/human, index 1 = right/AI
    pub paddles: [Paddle; 2],
    /// Seed the serve RNG was created from
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    /// Lay out a fresh court on a `width` x `height` surface
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mid_y = height / 2.0;
        let mut state = Self {
            width,
            height,
            initial_speed: INITIAL_SPEED,
            ball: Ball::default(),
            paddles: [
                Paddle::new(Vec2::new(PADDLE_MARGIN, mid_y)),
                Paddle::new(Vec2::new(width - PADDLE_MARGIN, mid_y)),
            ],
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Put the ball back in the middle, at rest
    pub fn reset(&mut self) {
        self.ball.vel = Vec2::ZERO;
        self.ball.rect.pos = Vec2::new(self.width / 2.0, self.height / 2.0);
    }

    /// Serve the ball if it is at rest. Returns whether a serve happened.
    ///
    /// Horizontal direction is a coin flip, vertical component is uniform in
    /// `[-SERVE_COMPONENT, SERVE_COMPONENT]`, and the result is rescaled to
    /// `initial_speed`.
    pub fn play(&mut self) -> bool {
        if self.ball.state() != BallState::AtRest {
            return false;
        }

        let dir_x = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let dir_y: f32 = self.rng.random_range(-1.0..=1.0);
        let vel = Vec2::new(SERVE_COMPONENT * dir_x, SERVE_COMPONENT * dir_y);
        self.ball.vel = vel.with_length(self.initial_speed);

        log::debug!(
            "Serve: vel=({:.1}, {:.1})",
            self.ball.vel.x,
            self.ball.vel.y
        );
        true
    }

    /// Move the human paddle to a fraction of the surface height.
    ///
    /// Out-of-range fractions are clamped; NaN is ignored.
    pub fn set_pointer(&mut self, fraction: f32) {
        if !fraction.is_finite() {
            return;
        }
        self.paddles[0].rect.pos.y = fraction.clamp(0.0, 1.0) * self.height;
    }

    /// Current scores, left then right
    pub fn scores(&self) -> [u32; 2] {
        [self.paddles[0].score, self.paddles[1].score]
    }
}
