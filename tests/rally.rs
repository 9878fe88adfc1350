use classic_pong::platform::FrameClock;
use classic_pong::renderer::{Color, Framebuffer};
use classic_pong::sim::{BallState, GameEvent};
use classic_pong::{Pong, Settings};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn new_game(seed: u64) -> (Pong, Framebuffer) {
    let settings = Settings::default();
    (
        Pong::new(800.0, 600.0, seed, &settings),
        Framebuffer::new(800, 600),
    )
}

/// Keep the human paddle on the opposite half of the court from the ball
fn dodge(pong: &mut Pong) {
    let fraction = if pong.state().ball.rect.pos.y < 300.0 { 1.0 } else { 0.0 };
    pong.pointer_moved(fraction);
}

#[test]
fn test_serve_to_the_right_and_score_past_ai() {
    let (mut pong, mut fb) = new_game(2024);

    // Serve until the ball heads right
    loop {
        pong.state_mut().reset();
        assert!(pong.serve());
        if pong.state().ball.vel.x > 0.0 {
            break;
        }
    }
    assert!((pong.state().ball.vel.length() - 250.0).abs() < 1e-3);

    // The AI never misses, so put the ball behind its paddle
    pong.state_mut().ball.rect.pos = Vec2::new(790.0, 300.0);

    let mut scored = None;
    for _ in 0..600 {
        let events = pong.frame(DT, &mut fb);
        if let Some(GameEvent::Scored { player, score }) = events
            .into_iter()
            .find(|e| matches!(e, GameEvent::Scored { .. }))
        {
            scored = Some((player, score));
            break;
        }
    }

    assert_eq!(scored, Some((0, 1)));
    assert_eq!(pong.state().scores(), [1, 0]);
    assert_eq!(pong.state().ball.rect.pos, Vec2::new(400.0, 300.0));
    assert_eq!(pong.state().ball.state(), BallState::AtRest);
}

#[test]
fn test_rally_until_human_misses() {
    let (mut pong, mut fb) = new_game(77);
    assert!(pong.serve());

    let mut scored = None;
    for _ in 0..60 * 120 {
        dodge(&mut pong);
        let events = pong.frame(DT, &mut fb);
        if let Some(GameEvent::Scored { player, .. }) = events
            .into_iter()
            .find(|e| matches!(e, GameEvent::Scored { .. }))
        {
            scored = Some(player);
            break;
        }
    }

    let player = scored.expect("someone should score within two minutes");
    let scores = pong.state().scores();
    assert_eq!(scores[0] + scores[1], 1);
    assert_eq!(scores[player], 1);
    assert_eq!(pong.state().ball.state(), BallState::AtRest);
    assert_eq!(pong.state().ball.rect.pos, Vec2::new(400.0, 300.0));

    // Scoreboard shows a "1" somewhere on the top band
    let lit = (20..70)
        .flat_map(|y| (0..800).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.pixel(x, y) == Some(Color::WHITE))
        .count();
    assert!(lit > 0);
}

#[test]
fn test_ball_stays_inside_vertical_bounds_during_play() {
    let (mut pong, mut fb) = new_game(9);
    assert!(pong.serve());

    for _ in 0..60 * 20 {
        dodge(&mut pong);
        pong.frame(DT, &mut fb);
        let ball = &pong.state().ball;
        if ball.state() == BallState::AtRest {
            break;
        }
        // At most one frame of overshoot past an edge before the bounce
        let slack = ball.vel.length() * DT + 1.0;
        assert!(ball.rect.top() > -slack);
        assert!(ball.rect.bottom() < 600.0 + slack);
        assert!(ball.vel.is_finite());
    }
}

#[test]
fn test_host_loop_skips_first_frame() {
    let (mut pong, mut fb) = new_game(5);
    let mut clock = FrameClock::new();
    assert!(pong.serve());
    let start = pong.state().ball.rect.pos;

    // First rAF callback: no delta, no update
    assert!(clock.tick(10_000.0).is_none());
    assert_eq!(pong.state().ball.rect.pos, start);

    let dt = clock.tick(10_000.0 + 1000.0 / 60.0).unwrap();
    pong.frame(dt, &mut fb);
    assert_ne!(pong.state().ball.rect.pos, start);
}

#[test]
fn test_same_seed_same_game() {
    let (mut a, mut fa) = new_game(31337);
    let (mut b, mut fb) = new_game(31337);
    a.serve();
    b.serve();

    for i in 0..600 {
        let fraction = (i as f32 * 0.01).sin() * 0.5 + 0.5;
        a.pointer_moved(fraction);
        b.pointer_moved(fraction);
        if a.state().ball.state() == BallState::AtRest {
            a.serve();
            b.serve();
        }
        a.frame(DT, &mut fa);
        b.frame(DT, &mut fb);
    }

    assert_eq!(a.state().ball.rect, b.state().ball.rect);
    assert_eq!(a.state().ball.vel, b.state().ball.vel);
    assert_eq!(a.state().scores(), b.state().scores());
    assert_eq!(fa.as_bytes(), fb.as_bytes());
}
