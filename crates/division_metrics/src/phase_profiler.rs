//! Per-phase, per-system timing

use crate::PhaseTiming;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub struct PhaseProfiler {
    timings: HashMap<(&'static str, &'static str), PhaseTiming>,
}

impl PhaseProfiler {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
        }
    }

    /// Run `f`, charging its wall time to `system` within `phase`.
    pub fn time<F, R>(&mut self, phase: &'static str, system: &'static str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        self.record(phase, system, start.elapsed());
        result
    }

    /// Charge one call of `elapsed` to `system` within `phase`.
    pub fn record(&mut self, phase: &'static str, system: &'static str, elapsed: Duration) {
        let entry = self.timings.entry((phase, system)).or_default();
        entry.total += elapsed;
        entry.calls += 1;
    }

    pub fn timing(&self, phase: &str, system: &str) -> PhaseTiming {
        self.timings
            .iter()
            .find(|((p, s), _)| *p == phase && *s == system)
            .map(|(_, timing)| *timing)
            .unwrap_or_default()
    }

    /// Sum of every system's time within `phase`.
    pub fn phase_total(&self, phase: &str) -> Duration {
        self.timings
            .iter()
            .filter(|((p, _), _)| *p == phase)
            .map(|(_, timing)| timing.total)
            .sum()
    }

    pub fn reset(&mut self) {
        self.timings.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str, &PhaseTiming)> {
        self.timings
            .iter()
            .map(|((phase, system), timing)| (*phase, *system, timing))
    }
}

impl Default for PhaseProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PhaseProfiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseProfiler")
            .field("entries", &self.timings.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_calls_per_phase_and_system() {
        let mut profiler = PhaseProfiler::new();
        profiler.time("update", "A", || ());
        profiler.time("update", "A", || ());
        profiler.time("render", "A", || ());

        assert_eq!(profiler.timing("update", "A").calls, 2);
        assert_eq!(profiler.timing("render", "A").calls, 1);
        assert_eq!(profiler.timing("awake", "A").calls, 0);
        assert_eq!(profiler.iter().count(), 2);

        profiler.record("update", "B", Duration::from_millis(4));
        profiler.record("update", "B", Duration::from_millis(2));
        assert_eq!(profiler.timing("update", "B").average(), Duration::from_millis(3));

        profiler.reset();
        assert_eq!(profiler.timing("update", "A").calls, 0);
    }
}
