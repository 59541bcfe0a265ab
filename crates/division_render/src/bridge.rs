//! Snapshot hand-off between the world and a graphics backend
//!
//! The bridge owns the render side of a world. Each render tick it takes
//! the world's write lock once, runs the Render phase, extracts draw data
//! and releases the lock. The immutable snapshot is then pushed over a
//! bounded channel, so the backend never touches component storage.

use crate::draw_data::{DrawData, RenderParams};
use crate::extract::world_to_draw_data;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use division_core::ecs::SharedWorld;
use std::sync::Arc;
use tracing::{debug, warn};

/// Snapshots kept in flight before the oldest is dropped.
pub const DEFAULT_CAPACITY: usize = 2;

pub struct RenderBridge {
    world: SharedWorld,
    params: RenderParams,
    sender: Sender<Arc<DrawData>>,
    // Used only to discard the oldest snapshot when the backend falls behind
    overflow: Receiver<Arc<DrawData>>,
    published: u64,
}

impl RenderBridge {
    pub fn new(world: SharedWorld, params: RenderParams) -> (Self, SnapshotReceiver) {
        Self::with_capacity(world, params, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(
        world: SharedWorld,
        params: RenderParams,
        capacity: usize,
    ) -> (Self, SnapshotReceiver) {
        let (sender, receiver) = bounded(capacity.max(1));
        let bridge = Self {
            world,
            params,
            sender,
            overflow: receiver.clone(),
            published: 0,
        };
        (bridge, SnapshotReceiver { receiver })
    }

    /// Render phase plus extraction under one lock, then publish.
    ///
    /// Returns the snapshot that was published.
    pub fn render_tick(&mut self) -> Arc<DrawData> {
        let snapshot = {
            let mut world = self.world.write();
            world.call_render();
            Arc::new(world_to_draw_data(&world, &self.params))
        };
        self.publish(snapshot.clone());
        snapshot
    }

    /// Extract without running the Render phase, under a read lock.
    pub fn snapshot(&self) -> DrawData {
        let world = self.world.read();
        world_to_draw_data(&world, &self.params)
    }

    /// Point the bridge at another world, e.g. after a world switch.
    pub fn bind(&mut self, world: SharedWorld) {
        if !self.world.ptr_eq(&world) {
            debug!("render bridge rebound");
            self.world = world;
        }
    }

    pub fn world(&self) -> &SharedWorld {
        &self.world
    }

    pub fn params(&self) -> RenderParams {
        self.params
    }

    pub fn set_params(&mut self, params: RenderParams) {
        self.params = params;
    }

    /// Snapshots published so far.
    pub fn published(&self) -> u64 {
        self.published
    }

    fn publish(&mut self, snapshot: Arc<DrawData>) {
        let mut pending = snapshot;
        loop {
            match self.sender.try_send(pending) {
                Ok(()) => {
                    self.published += 1;
                    return;
                }
                Err(TrySendError::Full(back)) => {
                    let _ = self.overflow.try_recv();
                    pending = back;
                }
                Err(TrySendError::Disconnected(_)) => {
                    warn!("snapshot receiver dropped");
                    return;
                }
            }
        }
    }
}

/// Backend end of the hand-off.
#[derive(Clone)]
pub struct SnapshotReceiver {
    receiver: Receiver<Arc<DrawData>>,
}

impl SnapshotReceiver {
    /// Newest pending snapshot, discarding older ones.
    pub fn latest(&self) -> Option<Arc<DrawData>> {
        self.receiver.try_iter().last()
    }

    /// Block until a snapshot arrives or the bridge is dropped.
    pub fn recv(&self) -> Option<Arc<DrawData>> {
        self.receiver.recv().ok()
    }

    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}
