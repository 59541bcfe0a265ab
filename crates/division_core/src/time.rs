//! Frame timing
//!
//! The clock is advanced once per Update by the time system. Systems read
//! it through `World::clock`.

use std::time::{Duration, Instant};

/// Default simulation tick rate.
pub const TICK_RATE_HZ: u32 = 60;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Nominal duration of one tick at `rate_hz`, truncated to whole
/// nanoseconds. A zero rate is treated as 1 Hz.
pub fn tick_duration(rate_hz: u32) -> Duration {
    Duration::from_nanos(NANOS_PER_SEC / u64::from(rate_hz.max(1)))
}

/// Delta time, elapsed time, frame count and average frame rate.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    started: Option<Instant>,
    last: Duration,
    delta: Duration,
    elapsed: Duration,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and start measuring from `now`.
    pub fn reset(&mut self, now: Instant) {
        *self = Self {
            started: Some(now),
            ..Self::default()
        };
    }

    /// Advance to the wall-clock instant `now`.
    ///
    /// A clock that was never reset starts at `now` with a zero delta.
    pub fn tick(&mut self, now: Instant) {
        let started = *self.started.get_or_insert(now);
        let since_start = now.saturating_duration_since(started);
        self.advance(since_start.saturating_sub(self.last));
    }

    /// Advance by a fixed amount, independent of wall-clock time.
    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.last = self.elapsed;
        self.frame_count += 1;
    }

    /// Seconds since the previous frame.
    pub fn delta(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Seconds since the clock was reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second averaged over the clock's lifetime.
    pub fn fps(&self) -> f32 {
        let secs = self.elapsed.as_secs_f32();
        if secs > 0.0 {
            self.frame_count as f32 / secs
        } else {
            0.0
        }
    }
}
