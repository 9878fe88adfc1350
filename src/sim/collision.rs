//! Paddle/ball collision response
//!
//! Detection is a plain box overlap. The response reflects the ball
//! horizontally with a small speed-up, then lets the paddle's vertical motion
//! bend the trajectory without changing the speed.

use super::state::{Ball, Paddle};
use super::vector::SetLength;
use crate::consts::{PADDLE_BOOST, PADDLE_SPIN};

/// Resolve a hit between `paddle` and `ball`. Returns whether they touched.
///
/// The horizontal reflection (x `PADDLE_BOOST`) is the only source of speed
/// growth: the spin nudge from the paddle's derived velocity is followed by a
/// rescale back to the post-reflection speed.
pub fn collide(paddle: &Paddle, ball: &mut Ball) -> bool {
    if !paddle.rect.overlaps(&ball.rect) {
        return false;
    }

    ball.vel.x *= PADDLE_BOOST;
    let speed = ball.vel.length();
    ball.vel.y += paddle.vel.y * PADDLE_SPIN;
    ball.vel.set_length(speed);
    true
}
