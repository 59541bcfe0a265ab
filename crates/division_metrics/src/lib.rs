//! Division Metrics - phase profiling and frame timing
//!
//! Instrumentation for the simulation loop that completely vanishes in
//! production builds via feature flags.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable metrics collection (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use division_metrics::{FrameTimer, PhaseProfiler};
//!
//! let mut profiler = PhaseProfiler::new();
//! profiler.time("update", "PlayerSystem", || player.update(world));
//!
//! let mut timer = FrameTimer::new(60); // Track last 60 frames
//! timer.begin();
//! // ... run a frame ...
//! timer.end();
//! tracing::info!(fps = timer.fps());
//! ```
//!
//! Without the `metrics` feature every type here is a zero-sized stub with
//! the same API.

#[cfg(feature = "metrics")]
mod frame_timer;
#[cfg(feature = "metrics")]
mod phase_profiler;

#[cfg(feature = "metrics")]
pub use frame_timer::FrameTimer;
#[cfg(feature = "metrics")]
pub use phase_profiler::PhaseProfiler;

/// Accumulated cost of one system within one phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTiming {
    pub total: std::time::Duration,
    pub calls: u64,
}

impl PhaseTiming {
    /// Mean duration of a single call, zero when never called.
    pub fn average(&self) -> std::time::Duration {
        if self.calls == 0 {
            return std::time::Duration::ZERO;
        }
        let calls = u32::try_from(self.calls).unwrap_or(u32::MAX);
        self.total / calls
    }
}

/// Execute code only when metrics are enabled
#[macro_export]
macro_rules! metrics {
    ($($tt:tt)*) => {
        #[cfg(feature = "metrics")]
        {
            $($tt)*
        }
    };
}

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
#[derive(Debug, Default)]
pub struct FrameTimer;

#[cfg(not(feature = "metrics"))]
impl FrameTimer {
    pub fn new(_window: usize) -> Self { Self }
    pub fn begin(&mut self) {}
    pub fn end(&mut self) {}
    pub fn record(&mut self, _frame: std::time::Duration) {}
    pub fn fps(&self) -> f64 { 0.0 }
    pub fn frame_time_ms(&self) -> f64 { 0.0 }
    pub fn frames(&self) -> u64 { 0 }
}

#[cfg(not(feature = "metrics"))]
#[derive(Debug, Default)]
pub struct PhaseProfiler;

#[cfg(not(feature = "metrics"))]
impl PhaseProfiler {
    pub fn new() -> Self { Self }
    pub fn time<F, R>(&mut self, _phase: &'static str, _system: &'static str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        f()
    }
    pub fn record(&mut self, _phase: &'static str, _system: &'static str, _elapsed: std::time::Duration) {}
    pub fn timing(&self, _phase: &str, _system: &str) -> PhaseTiming { PhaseTiming::default() }
    pub fn phase_total(&self, _phase: &str) -> std::time::Duration { std::time::Duration::ZERO }
    pub fn reset(&mut self) {}
}
