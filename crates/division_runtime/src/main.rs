//! Division Engine Runtime
//!
//! Boots logging and settings, builds the startup world, then drives the
//! simulation on the main thread and render snapshots on a second thread.
//! Ctrl-C stops the engine and the runtime shuts down cleanly.
//!
//! Usage: `division [settings.json]`

use anyhow::{anyhow, Context, Result};
use division_core::ecs::{SharedWorld, SystemRegistry, World, WorldManager, DEFAULT_WORLD_KEY};
use division_core::engine::{Engine, EngineHandle};
use division_core::persist::ComponentCatalog;
use division_core::time::tick_duration;
use division_metrics::FrameTimer;
use division_render::{RenderBridge, RenderParams, SnapshotReceiver};
use division_services::{load_into, Settings};
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_SETTINGS_PATH: &str = "division.json";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Division Engine v{}", division_core::VERSION);

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = Settings::load(&settings_path)?;

    let mut worlds = WorldManager::new();
    let world = startup_world(&mut worlds, &settings)?;
    world
        .write()
        .set_viewport(settings.render.width, settings.render.height);

    let mut engine = Engine::new(worlds);
    engine.start();
    // Detached: it only finishes once an interrupt arrives.
    spawn_interrupt_listener(engine.handle(), tokio::signal::ctrl_c)?;

    let params = RenderParams {
        max_ray_steps: settings.render.max_ray_steps,
        max_shadow_ray_steps: settings.render.max_shadow_ray_steps,
    };
    let (bridge, snapshots) = RenderBridge::new(world, params);
    let render = spawn_render(bridge, engine.handle(), settings.render.target_fps)?;

    let frames = run_simulation(&engine, &settings, &snapshots);
    info!(frames, "simulation finished");

    engine.stop();
    render
        .join()
        .map_err(|_| anyhow!("render thread panicked"))?;

    if let Some(world) = engine.worlds().current_world() {
        world.write().call_unload();
    }
    info!("shutdown complete");
    Ok(())
}

/// Saved world from settings if one is configured, otherwise the default
/// scene. Either way it becomes the current world.
fn startup_world(worlds: &mut WorldManager, settings: &Settings) -> Result<SharedWorld> {
    match &settings.startup.world_path {
        Some(path) => {
            let mut world = World::from_registry(&SystemRegistry::builtin())?;
            load_into(path, &ComponentCatalog::builtin(), &mut world)
                .with_context(|| format!("loading startup world {}", path.display()))?;
            let world = worlds.set_world(DEFAULT_WORLD_KEY, world);
            worlds.switch_world(DEFAULT_WORLD_KEY);
            Ok(world)
        }
        None => Ok(worlds.create_default_world(true)?),
    }
}

fn spawn_render(
    mut bridge: RenderBridge,
    engine: EngineHandle,
    target_fps: u32,
) -> Result<JoinHandle<()>> {
    let frame = tick_duration(target_fps);
    thread::Builder::new()
        .name("render".into())
        .spawn(move || {
            info!(target_fps, "render thread started");
            while !engine.is_stopped() {
                let started = Instant::now();
                if engine.is_running() {
                    bridge.render_tick();
                }
                if let Some(rest) = frame.checked_sub(started.elapsed()) {
                    thread::sleep(rest);
                }
            }
            info!(published = bridge.published(), "render thread stopped");
        })
        .context("spawning render thread")
}

/// Stop the engine once `signal` resolves.
///
/// The signal future runs on its own thread under a current-thread tokio
/// runtime, so the frame loop stays synchronous.
fn spawn_interrupt_listener<F, Fut>(engine: EngineHandle, signal: F) -> Result<JoinHandle<()>>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = io::Result<()>>,
{
    thread::Builder::new()
        .name("signal".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    warn!(%err, "signal runtime unavailable, Ctrl-C will not stop the engine");
                    return;
                }
            };
            match runtime.block_on(signal()) {
                Ok(()) => {
                    info!("interrupt received, shutting down");
                    engine.stop();
                }
                Err(err) => warn!(%err, "failed to listen for interrupt"),
            }
        })
        .context("spawning signal thread")
}

/// Counts frames that actually ran and flags every `every`-th one for a
/// report. Ticks skipped while paused are not counted.
struct ReportCadence {
    frames: u64,
    every: u64,
}

impl ReportCadence {
    fn new(every: u64) -> Self {
        Self {
            frames: 0,
            every: every.max(1),
        }
    }

    fn frame_done(&mut self, ran: bool) -> bool {
        if !ran {
            return false;
        }
        self.frames += 1;
        self.frames % self.every == 0
    }

    fn frames(&self) -> u64 {
        self.frames
    }
}

/// Fixed-rate frame loop. Ends when the engine is stopped or the frame cap
/// is reached. Returns the number of frames run.
fn run_simulation(engine: &Engine, settings: &Settings, snapshots: &SnapshotReceiver) -> u64 {
    let tick = tick_duration(settings.simulation.tick_rate_hz);
    let report_every = u64::from(settings.simulation.tick_rate_hz.max(1));
    let mut timer = FrameTimer::new(report_every as usize);
    let mut cadence = ReportCadence::new(report_every);
    let mut next = Instant::now();

    while !engine.handle().is_stopped() {
        if settings
            .simulation
            .max_frames
            .is_some_and(|max| cadence.frames() >= max)
        {
            info!(frames = cadence.frames(), "frame cap reached");
            break;
        }

        timer.begin();
        let ran = engine.run_frame();
        timer.end();

        if cadence.frame_done(ran) {
            report(cadence.frames(), &timer, snapshots);
        }

        next += tick;
        let now = Instant::now();
        match next.checked_duration_since(now) {
            Some(wait) if wait > Duration::ZERO => thread::sleep(wait),
            _ => next = now,
        }
    }
    cadence.frames()
}

fn report(frames: u64, timer: &FrameTimer, snapshots: &SnapshotReceiver) {
    let Some(snapshot) = snapshots.latest() else {
        info!(frames, fps = timer.fps(), "simulation");
        return;
    };
    let (gpu_world, primitives) = snapshot.to_gpu();
    info!(
        frames,
        fps = timer.fps(),
        frame_ms = timer.frame_time_ms(),
        render_frame = snapshot.frame,
        primitives = gpu_world.primitive_count,
        "simulation"
    );
    debug!(bytes = std::mem::size_of_val(primitives.as_slice()), "primitive buffer");
}
