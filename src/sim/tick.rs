//! Per-frame simulation step
//!
//! Advances the court by a variable `dt` supplied by the host scheduler.

use super::collision::collide;
use super::state::{GameEvent, GameState};

impl GameState {
    /// Advance the game by `dt` seconds and report what happened.
    ///
    /// Order matters and matches the classic game: integrate the ball, check
    /// for a point, bounce off the top/bottom edges, let the AI paddle follow
    /// the ball, then derive paddle velocities and resolve paddle hits (left
    /// paddle first).
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if !(dt > 0.0 && dt.is_finite()) {
            log::warn!("Ignoring frame with invalid dt: {}", dt);
            return events;
        }

        let ball = &mut self.ball;
        ball.rect.pos += ball.vel * dt;

        // Ball left the court: whoever it was heading away from scores
        if ball.rect.right() < 0.0 || ball.rect.left() > self.width {
            let player = usize::from(ball.vel.x < 0.0);
            let paddle = &mut self.paddles[player];
            paddle.score = paddle.score.saturating_add(1);
            log::info!(
                "Player {} scores ({} - {})",
                player,
                self.paddles[0].score,
                self.paddles[1].score
            );
            events.push(GameEvent::Scored {
                player,
                score: self.paddles[player].score,
            });
            self.reset();
        }

        // No position correction: the ball may sit past the edge for a frame
        let ball = &mut self.ball;
        if (ball.vel.y < 0.0 && ball.rect.top() < 0.0)
            || (ball.vel.y > 0.0 && ball.rect.bottom() > self.height)
        {
            ball.vel.y = -ball.vel.y;
            log::debug!("Wall bounce at y={:.1}", ball.rect.pos.y);
            events.push(GameEvent::WallBounce);
        }

        // AI paddle follows the ball exactly
        self.paddles[1].rect.pos.y = self.ball.rect.pos.y;

        let ball = &mut self.ball;
        for (player, paddle) in self.paddles.iter_mut().enumerate() {
            paddle.update(dt);
            if collide(paddle, ball) {
                let speed = ball.vel.length();
                log::debug!("Paddle {} hit, speed now {:.1}", player, speed);
                events.push(GameEvent::PaddleHit { player, speed });
            }
        }

        events
    }
}
