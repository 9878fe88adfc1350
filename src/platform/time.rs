//! Frame timing

/// Turns per-frame timestamps (milliseconds) into simulation deltas (seconds).
///
/// The first frame has nothing to measure against, so it produces no delta;
/// hosts skip the update for that frame.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `now_ms` and return seconds elapsed since the previous call.
    ///
    /// Returns `None` on the first call and whenever time did not advance.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let last = self.last_ms.replace(now_ms)?;
        let dt = ((now_ms - last) / 1000.0) as f32;
        (dt > 0.0 && dt.is_finite()).then_some(dt)
    }

    /// Forget the previous timestamp (e.g. after the host was suspended)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
