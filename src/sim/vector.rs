//! Vector length manipulation
//!
//! `glam::Vec2` already reads its magnitude with `length()`. Pong also needs to
//! *write* it: serves and paddle hits rescale the ball velocity to a chosen
//! speed while keeping its direction.

use glam::Vec2;

/// Rescale a vector to a given magnitude, preserving direction.
pub trait SetLength {
    /// Rescale in place so that `length() == len`.
    ///
    /// A zero (or non-finite) vector has no direction to preserve, so it is
    /// left untouched instead of turning into NaN.
    fn set_length(&mut self, len: f32);

    /// Owned variant of [`SetLength::set_length`].
    fn with_length(self, len: f32) -> Self;
}

impl SetLength for Vec2 {
    fn set_length(&mut self, len: f32) {
        let current = self.length();
        if current == 0.0 || !current.is_finite() {
            return;
        }
        *self *= len / current;
    }

    fn with_length(mut self, len: f32) -> Self {
        self.set_length(len);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_length_scales_3_4_5() {
        let mut v = Vec2::new(3.0, 4.0);
        v.set_length(10.0);
        assert!((v.x - 6.0).abs() < 1e-5);
        assert!((v.y - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_set_length_zero_vector_stays_zero() {
        let mut v = Vec2::ZERO;
        v.set_length(250.0);
        assert_eq!(v, Vec2::ZERO);
        assert!(v.is_finite());
    }

    #[test]
    fn test_set_length_negative_flips_direction() {
        let v = Vec2::new(1.0, 0.0).with_length(-2.0);
        assert!((v.x + 2.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_set_length_hits_target(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            len in 0.1f32..5000.0,
        ) {
            let v = Vec2::new(x, y);
            prop_assume!(v.length() > 1e-3);

            let scaled = v.with_length(len);
            prop_assert!((scaled.length() - len).abs() < len * 1e-4 + 1e-4);

            // Same direction: parallel and pointing the same way
            let cross = v.x * scaled.y - v.y * scaled.x;
            prop_assert!(cross.abs() <= v.length() * scaled.length() * 1e-4);
            prop_assert!(v.dot(scaled) > 0.0);
        }
    }
}
