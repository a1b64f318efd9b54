//! Monotonic time source for the game loop.

use web_time::Instant;

/// Clock sampled once per update tick to derive delta and elapsed time.
pub trait Clock {
    /// Seconds since an arbitrary fixed origin.
    ///
    /// Must be monotonically non-decreasing.
    fn now(&self) -> f32;
}

/// Wall clock backed by [`web_time::Instant`], usable on both desktop and web.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    /// Construction time, used as the origin.
    origin: Instant,
}

impl MonotonicClock {
    /// Start a new clock with its origin at the current instant.
    #[must_use]
    pub fn new() -> Self {
        let origin = Instant::now();

        Self { origin }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }
}
