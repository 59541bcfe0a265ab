//! Rolling frame timing

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tracks the last `window` frame durations for FPS reporting.
#[derive(Debug)]
pub struct FrameTimer {
    frame_start: Instant,
    window: usize,
    samples: VecDeque<Duration>,
    frames: u64,
}

impl FrameTimer {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            frame_start: Instant::now(),
            window,
            samples: VecDeque::with_capacity(window),
            frames: 0,
        }
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    pub fn end(&mut self) {
        let elapsed = self.frame_start.elapsed();
        self.record(elapsed);
    }

    /// Push an externally measured frame duration.
    pub fn record(&mut self, frame: Duration) {
        if self.samples.len() == self.window {
            self.samples.pop_front();
        }
        self.samples.push_back(frame);
        self.frames += 1;
    }

    pub fn fps(&self) -> f64 {
        let avg = self.average().as_secs_f64();
        if avg > 0.0 {
            1.0 / avg
        } else {
            0.0
        }
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.average().as_secs_f64() * 1000.0
    }

    /// Total frames recorded since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn average(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let sum: Duration = self.samples.iter().sum();
        sum / self.samples.len() as u32
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(60)
    }
}
