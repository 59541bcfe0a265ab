// scheduler.rs - Per-phase system dispatch
//
// Systems are classified into phase lists once, when they are added. The
// world sweeps one list in registration order, borrowing each system out of
// its slot only for the duration of its own hook, so the scheduler stays
// whole and inspectable while hooks run.

use crate::ecs::{Phase, System};
use division_metrics::PhaseProfiler;
use std::time::Duration;
use tracing::debug;

#[derive(Default)]
pub struct SystemScheduler {
    slots: Vec<Option<Box<dyn System>>>,
    names: Vec<&'static str>,
    subscribers: [Vec<usize>; 5],
    profiler: PhaseProfiler,
}

impl SystemScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system and subscribe it to every phase it opted into.
    pub fn add(&mut self, mut system: Box<dyn System>) {
        let index = self.slots.len();
        let mut phases = Vec::new();
        for phase in Phase::ALL {
            if system.subscribes_to(phase) {
                self.subscribers[phase.index()].push(index);
                phases.push(phase.as_str());
            }
        }
        let name = system.name();
        debug!(system = name, ?phases, "system registered");
        self.names.push(name);
        self.slots.push(Some(system));
    }

    /// Add every system in order.
    pub(crate) fn absorb(&mut self, systems: Vec<Box<dyn System>>) {
        for system in systems {
            self.add(system);
        }
    }

    /// Slot index of the `position`-th subscriber of `phase`.
    pub(crate) fn subscriber(&self, phase: Phase, position: usize) -> Option<usize> {
        self.subscribers[phase.index()].get(position).copied()
    }

    /// Borrow the system in `index` out of its slot. `None` while it is
    /// already lent, i.e. when its own hook re-enters a sweep.
    pub(crate) fn lend(&mut self, index: usize) -> Option<Box<dyn System>> {
        self.slots.get_mut(index)?.take()
    }

    /// Put a lent system back and charge its call to the profiler.
    pub(crate) fn give_back(
        &mut self,
        index: usize,
        system: Box<dyn System>,
        phase: Phase,
        elapsed: Duration,
    ) {
        self.profiler.record(phase.as_str(), system.name(), elapsed);
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(system);
        }
    }

    /// Registered systems, including any currently running.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn subscriber_count(&self, phase: Phase) -> usize {
        self.subscribers[phase.index()].len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    /// Names in registration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn profiler(&self) -> &PhaseProfiler {
        &self.profiler
    }
}

impl std::fmt::Debug for SystemScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemScheduler")
            .field("systems", &self.names)
            .finish()
    }
}
