//! Center-anchored axis-aligned boxes

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box anchored at its center.
///
/// Screen coordinates: `top` is the smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center point
    pub pos: Vec2,
    /// Full width/height (never negative)
    pub size: Vec2,
}

impl Rect {
    /// A box of the given size centered on the origin
    pub fn new(width: f32, height: f32) -> Self {
        Self::at(Vec2::ZERO, Vec2::new(width, height))
    }

    /// A box of the given size centered on `pos`
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size: size.max(Vec2::ZERO),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges() {
        let r = Rect::at(Vec2::new(40.0, 300.0), Vec2::new(20.0, 100.0));
        assert_eq!(r.left(), 30.0);
        assert_eq!(r.right(), 50.0);
        assert_eq!(r.top(), 250.0);
        assert_eq!(r.bottom(), 350.0);
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let r = Rect::at(Vec2::ZERO, Vec2::new(-5.0, 4.0));
        assert_eq!(r.size, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_overlap() {
        let paddle = Rect::at(Vec2::new(40.0, 300.0), Vec2::new(20.0, 100.0));
        let ball = Rect::at(Vec2::new(52.0, 300.0), Vec2::new(10.0, 10.0));
        assert!(paddle.overlaps(&ball));
        assert!(ball.overlaps(&paddle));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let paddle = Rect::at(Vec2::new(40.0, 300.0), Vec2::new(20.0, 100.0));
        // Ball left edge exactly on paddle right edge
        let beside = Rect::at(Vec2::new(55.0, 300.0), Vec2::new(10.0, 10.0));
        assert!(!paddle.overlaps(&beside));
        // Ball top edge exactly on paddle bottom edge
        let below = Rect::at(Vec2::new(40.0, 355.0), Vec2::new(10.0, 10.0));
        assert!(!paddle.overlaps(&below));
    }

    #[test]
    fn test_separated_boxes() {
        let a = Rect::at(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::at(Vec2::new(100.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    proptest! {
        #[test]
        fn prop_edges_span_size(
            cx in -10_000.0f32..10_000.0,
            cy in -10_000.0f32..10_000.0,
            w in 0.0f32..1000.0,
            h in 0.0f32..1000.0,
        ) {
            let r = Rect::at(Vec2::new(cx, cy), Vec2::new(w, h));
            prop_assert!((r.right() - r.left() - w).abs() < 1e-2);
            prop_assert!((r.bottom() - r.top() - h).abs() < 1e-2);
            prop_assert!(r.left() <= r.pos.x && r.pos.x <= r.right());
            prop_assert!(r.top() <= r.pos.y && r.pos.y <= r.bottom());
        }
    }
}
