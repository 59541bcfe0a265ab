//! Engine run-state machine
//!
//! The engine decides when phases run; the world decides what runs. State
//! lives in an atomic shared with every [`EngineHandle`], so another thread
//! can stop or pause the engine at any time. A stop never interrupts a frame
//! already in progress, it only prevents the next one.

use crate::ecs::WorldManager;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RunState {
    Stopped = 0,
    Running = 1,
    Paused = 2,
}

impl RunState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => RunState::Running,
            2 => RunState::Paused,
            _ => RunState::Stopped,
        }
    }
}

/// Cloneable remote control for an [`Engine`].
#[derive(Debug, Clone)]
pub struct EngineHandle {
    state: Arc<AtomicU8>,
}

impl EngineHandle {
    pub fn state(&self) -> RunState {
        RunState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.state() == RunState::Stopped
    }

    /// Stop from any state.
    pub fn stop(&self) {
        let previous = self.state.swap(RunState::Stopped as u8, Ordering::AcqRel);
        if previous != RunState::Stopped as u8 {
            info!("engine stopped");
        }
    }

    /// Running -> Paused. No effect in any other state.
    pub fn pause(&self) -> bool {
        self.transition(RunState::Running, RunState::Paused)
    }

    /// Paused -> Running. No effect in any other state.
    pub fn resume(&self) -> bool {
        self.transition(RunState::Paused, RunState::Running)
    }

    fn transition(&self, from: RunState, to: RunState) -> bool {
        self.state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

pub struct Engine {
    worlds: WorldManager,
    handle: EngineHandle,
}

impl Engine {
    pub fn new(worlds: WorldManager) -> Self {
        Self {
            worlds,
            handle: EngineHandle {
                state: Arc::new(AtomicU8::new(RunState::Stopped as u8)),
            },
        }
    }

    /// Enter Running and run Awake once on the current world.
    pub fn start(&mut self) {
        self.handle
            .state
            .store(RunState::Running as u8, Ordering::Release);
        info!("engine started");
        match self.worlds.current_world() {
            Some(world) => world.write().call_awake(),
            None => warn!("engine started without a current world"),
        }
    }

    pub fn stop(&self) {
        self.handle.stop();
    }

    pub fn pause(&self) -> bool {
        self.handle.pause()
    }

    pub fn resume(&self) -> bool {
        self.handle.resume()
    }

    pub fn state(&self) -> RunState {
        self.handle.state()
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state() == RunState::Paused
    }

    /// Run Update then FixedUpdate on the current world.
    ///
    /// Returns false and runs nothing unless the engine is Running and has
    /// a current world. Both phases run under one write lock.
    pub fn run_frame(&self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(world) = self.worlds.current_world() else {
            return false;
        };
        let mut world = world.write();
        world.call_update();
        world.call_fixed_update();
        true
    }

    pub fn handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    pub fn worlds(&self) -> &WorldManager {
        &self.worlds
    }

    pub fn worlds_mut(&mut self) -> &mut WorldManager {
        &mut self.worlds
    }
}
