// world.rs - One self-contained universe of entities, components and systems

use crate::components::{Name, Transform};
use crate::ecs::query::EntitySet;
use crate::ecs::{
    AnyComponent, Component, ComponentId, ComponentStore, Entity, EntityRegistry, Phase, System,
    SystemRegistrationError, SystemRegistry, SystemScheduler,
};
use crate::input::InputState;
use crate::time::FrameClock;
use division_metrics::PhaseProfiler;
use glam::UVec2;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised while constructing a world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to register systems: {0}")]
    Registration(#[from] SystemRegistrationError),
}

/// Viewport size used when nothing else has been configured.
pub const DEFAULT_VIEWPORT: UVec2 = UVec2::new(1280, 720);

pub struct World {
    entities: EntityRegistry,
    components: ComponentStore,
    scheduler: SystemScheduler,
    // Systems registered while a sweep is running.
    pending: Vec<Box<dyn System>>,
    sweep_depth: u32,
    clock: FrameClock,
    input: InputState,
    viewport: UVec2,
}

impl World {
    /// Create an empty world with no systems.
    pub fn new() -> Self {
        Self {
            entities: EntityRegistry::new(),
            components: ComponentStore::new(),
            scheduler: SystemScheduler::new(),
            pending: Vec::new(),
            sweep_depth: 0,
            clock: FrameClock::new(),
            input: InputState::new(),
            viewport: DEFAULT_VIEWPORT,
        }
    }

    /// Create a world whose systems come from `registry`, in registry order.
    ///
    /// Fails without producing a world if any factory fails.
    pub fn from_registry(registry: &SystemRegistry) -> Result<Self, WorldError> {
        let systems = registry.instantiate()?;
        let mut world = Self::new();
        for system in systems {
            world.scheduler.add(system);
        }
        debug!(systems = world.scheduler.len(), "world constructed");
        Ok(world)
    }

    // ------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------

    pub fn create_entity(&mut self) -> Entity {
        self.entities.create()
    }

    pub fn create_named_entity(&mut self, name: impl Into<String>) -> Entity {
        let entity = self.entities.create();
        self.components.insert(entity, Name::new(name));
        entity
    }

    /// Entity with a default Transform and, optionally, a Name.
    pub fn create_transform_entity(&mut self, name: Option<&str>) -> Entity {
        let entity = match name {
            Some(name) => self.create_named_entity(name),
            None => self.entities.create(),
        };
        self.components.insert(entity, Transform::default());
        entity
    }

    pub fn entity_exists(&self, entity: Entity) -> bool {
        self.entities.contains(entity)
    }

    /// Destroy `entity` and every component attached to it.
    ///
    /// Returns false if the entity was not alive.
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.entities.destroy(entity) {
            return false;
        }
        let removed = self.components.purge(entity);
        debug!(%entity, components = removed, "entity destroyed");
        true
    }

    /// The entity's name, or an empty string when it has none.
    pub fn try_get_entity_name(&self, entity: Entity) -> String {
        self.components
            .get::<Name>(entity)
            .and_then(Name::as_str)
            .unwrap_or_default()
            .to_string()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Live entities in ascending id order.
    pub fn entities(&self) -> Vec<Entity> {
        self.entities.sorted()
    }

    // ------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------

    /// Attach `value`. False if the entity is dead or already has a `T`.
    pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> bool {
        if !self.entities.contains(entity) {
            return false;
        }
        self.components.insert(entity, value)
    }

    /// Detach the `T` on `entity`. False if there was none.
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> bool {
        self.take_component::<T>(entity).is_some()
    }

    /// Detach and return the `T` on `entity`.
    pub fn take_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        if !self.entities.contains(entity) {
            return None;
        }
        self.components.remove::<T>(entity)
    }

    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.components.get::<T>(entity)
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.get_mut::<T>(entity)
    }

    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.components.contains::<T>(entity)
    }

    pub fn get_all_components(&self, entity: Entity) -> Vec<&dyn AnyComponent> {
        self.components.components_of(entity)
    }

    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn query<T: Component>(&self) -> EntitySet {
        self.components.query::<T>()
    }

    pub fn query_kinds(&self, kinds: &[ComponentId]) -> EntitySet {
        self.components.query_kinds(kinds)
    }

    pub fn query_data<A: Component>(&self) -> impl Iterator<Item = (Entity, &A)> + '_ {
        self.components.query_data::<A>()
    }

    pub fn query_data2<A: Component, B: Component>(
        &self,
    ) -> impl Iterator<Item = (Entity, &A, &B)> + '_ {
        self.components.query_data2::<A, B>()
    }

    pub fn query_data3<A: Component, B: Component, C: Component>(
        &self,
    ) -> impl Iterator<Item = (Entity, &A, &B, &C)> + '_ {
        self.components.query_data3::<A, B, C>()
    }

    pub fn query_data_mut<A: Component>(&mut self) -> impl Iterator<Item = (Entity, &mut A)> + '_ {
        self.components.query_data_mut::<A>()
    }

    pub fn query_data2_mut<A: Component, B: Component>(
        &mut self,
    ) -> impl Iterator<Item = (Entity, &mut A, &mut B)> + '_ {
        self.components.query_data2_mut::<A, B>()
    }

    pub fn query_data3_mut<A: Component, B: Component, C: Component>(
        &mut self,
    ) -> impl Iterator<Item = (Entity, &mut A, &mut B, &mut C)> + '_ {
        self.components.query_data3_mut::<A, B, C>()
    }

    pub fn query_data_dyn(
        &self,
        kinds: &[ComponentId],
    ) -> impl Iterator<Item = (Entity, Vec<&dyn AnyComponent>)> + '_ {
        self.components.query_data_dyn(kinds)
    }

    // ------------------------------------------------------------------
    // Systems
    // ------------------------------------------------------------------

    /// Add a system to the end of every phase list it subscribes to.
    ///
    /// A system added from inside a phase sweep joins after that sweep ends.
    pub fn register_system(&mut self, system: Box<dyn System>) {
        if self.sweep_depth > 0 {
            debug!(system = system.name(), "system queued until sweep ends");
            self.pending.push(system);
        } else {
            self.scheduler.add(system);
        }
    }

    pub fn add_system<S: System>(&mut self, system: S) {
        self.register_system(Box::new(system));
    }

    pub fn call_awake(&mut self) {
        self.run_phase(Phase::Awake);
    }

    pub fn call_update(&mut self) {
        self.run_phase(Phase::Update);
    }

    pub fn call_fixed_update(&mut self) {
        self.run_phase(Phase::FixedUpdate);
    }

    pub fn call_unload(&mut self) {
        self.run_phase(Phase::Unload);
    }

    pub fn call_render(&mut self) {
        self.run_phase(Phase::Render);
    }

    /// Sweep one phase in registration order.
    ///
    /// Only the system being called is out of the scheduler, so hooks can
    /// still inspect the world's systems. A hook that re-enters a sweep
    /// skips itself there.
    pub fn run_phase(&mut self, phase: Phase) {
        trace!(phase = phase.as_str(), "sweep");
        self.sweep_depth += 1;
        let mut position = 0;
        while let Some(index) = self.scheduler.subscriber(phase, position) {
            position += 1;
            let Some(mut system) = self.scheduler.lend(index) else {
                continue;
            };
            let start = Instant::now();
            system.run_phase(phase, self);
            self.scheduler.give_back(index, system, phase, start.elapsed());
        }
        self.sweep_depth -= 1;

        if self.sweep_depth == 0 && !self.pending.is_empty() {
            let added = std::mem::take(&mut self.pending);
            self.scheduler.absorb(added);
        }
    }

    /// Registered systems, including ones queued by a running sweep.
    pub fn system_count(&self) -> usize {
        self.scheduler.len() + self.pending.len()
    }

    pub fn subscriber_count(&self, phase: Phase) -> usize {
        self.scheduler.subscriber_count(phase)
    }

    pub fn system_names(&self) -> Vec<&'static str> {
        let queued = self.pending.iter().map(|system| system.name());
        self.scheduler.names().iter().copied().chain(queued).collect()
    }

    pub fn has_system(&self, name: &str) -> bool {
        self.scheduler.contains(name) || self.pending.iter().any(|system| system.name() == name)
    }

    pub fn profiler(&self) -> &PhaseProfiler {
        self.scheduler.profiler()
    }

    // ------------------------------------------------------------------
    // Frame state
    // ------------------------------------------------------------------

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn viewport(&self) -> UVec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = UVec2::new(width, height);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.entities.len())
            .field("components", &self.components)
            .field("systems", &self.scheduler)
            .finish()
    }
}

/// Cloneable, thread-safe handle to a world.
///
/// Mutation and snapshot extraction each take the lock once for their
/// whole duration, so readers never see a half-run phase.
#[derive(Clone, Default)]
pub struct SharedWorld(Arc<RwLock<World>>);

impl SharedWorld {
    pub fn new(world: World) -> Self {
        Self(Arc::new(RwLock::new(world)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, World> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, World> {
        self.0.write()
    }

    /// True if both handles point at the same world.
    pub fn ptr_eq(&self, other: &SharedWorld) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<World> for SharedWorld {
    fn from(world: World) -> Self {
        Self::new(world)
    }
}

impl std::fmt::Debug for SharedWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedWorld")
            .field(&Arc::as_ptr(&self.0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{Awake, FixedUpdate, Render, Unload, Update};
    use crate::impl_system;
    use serde::{Deserialize, Serialize};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Health(i32);
    crate::define_component!(Health, 150, "Health");

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Armor(i32);
    crate::define_component!(Armor, 151, "Armor");

    #[derive(Default, Clone)]
    struct Calls {
        awake: Arc<AtomicUsize>,
        update: Arc<AtomicUsize>,
        fixed: Arc<AtomicUsize>,
        unload: Arc<AtomicUsize>,
        render: Arc<AtomicUsize>,
    }

    impl Calls {
        fn get(counter: &Arc<AtomicUsize>) -> usize {
            counter.load(Ordering::SeqCst)
        }
    }

    struct UpdateOnly(Calls);
    impl Update for UpdateOnly {
        fn update(&mut self, _world: &mut World) {
            self.0.update.fetch_add(1, Ordering::SeqCst);
        }
    }
    impl_system!(UpdateOnly => Update);

    struct UpdateAndRender(Calls);
    impl Update for UpdateAndRender {
        fn update(&mut self, _world: &mut World) {
            self.0.update.fetch_add(1, Ordering::SeqCst);
        }
    }
    impl Render for UpdateAndRender {
        fn render(&mut self, _world: &mut World) {
            self.0.render.fetch_add(1, Ordering::SeqCst);
        }
    }
    impl_system!(UpdateAndRender => Update, Render);

    struct Everything(Calls);
    impl Awake for Everything {
        fn awake(&mut self, _world: &mut World) {
            self.0.awake.fetch_add(1, Ordering::SeqCst);
        }
    }
    impl Update for Everything {
        fn update(&mut self, _world: &mut World) {
            self.0.update.fetch_add(1, Ordering::SeqCst);
        }
    }
    impl FixedUpdate for Everything {
        fn fixed_update(&mut self, _world: &mut World) {
            self.0.fixed.fetch_add(1, Ordering::SeqCst);
        }
    }
    impl Unload for Everything {
        fn unload(&mut self, _world: &mut World) {
            self.0.unload.fetch_add(1, Ordering::SeqCst);
        }
    }
    impl Render for Everything {
        fn render(&mut self, _world: &mut World) {
            self.0.render.fetch_add(1, Ordering::SeqCst);
        }
    }
    impl_system!(Everything => Awake, Update, FixedUpdate, Unload, Render);

    /// Appends its label to a shared log on Update.
    struct Recorder {
        label: &'static str,
        log: Arc<parking_lot::Mutex<Vec<&'static str>>>,
    }
    impl Update for Recorder {
        fn update(&mut self, _world: &mut World) {
            self.log.lock().push(self.label);
        }
    }
    impl_system!(Recorder => Update);

    /// Registers another system the first time it runs.
    struct Spawner {
        calls: Calls,
        spawned: bool,
    }
    impl Update for Spawner {
        fn update(&mut self, world: &mut World) {
            if !self.spawned {
                self.spawned = true;
                world.add_system(UpdateOnly(self.calls.clone()));
            }
        }
    }
    impl_system!(Spawner => Update);

    /// Looks at the world's system list from inside its own hook.
    #[derive(Default, Clone)]
    struct Introspect {
        seen_count: Arc<AtomicUsize>,
        seen_self: Arc<AtomicBool>,
    }
    impl Update for Introspect {
        fn update(&mut self, world: &mut World) {
            self.seen_count.store(world.system_count(), Ordering::SeqCst);
            self.seen_self
                .store(world.has_system("Introspect"), Ordering::SeqCst);
        }
    }
    impl_system!(Introspect => Update);

    /// Runs a render sweep from inside its update hook.
    struct NestedRender(Calls);
    impl Update for NestedRender {
        fn update(&mut self, world: &mut World) {
            world.call_render();
        }
    }
    impl Render for NestedRender {
        fn render(&mut self, _world: &mut World) {
            self.0.render.fetch_add(1, Ordering::SeqCst);
        }
    }
    impl_system!(NestedRender => Update, Render);

    /// Moves every Health up by one on Update.
    struct Regen;
    impl Update for Regen {
        fn update(&mut self, world: &mut World) {
            for (_, health) in world.query_data_mut::<Health>() {
                health.0 += 1;
            }
        }
    }
    impl_system!(Regen => Update);

    #[test]
    fn test_destroyed_entity_has_no_components() {
        let mut world = World::new();
        let e = world.create_transform_entity(Some("Crate"));
        world.add_component(e, Health(10));
        assert_eq!(world.get_all_components(e).len(), 3);

        assert!(world.destroy_entity(e));
        assert!(!world.entity_exists(e));
        assert!(world.get_all_components(e).is_empty());
        assert!(!world.destroy_entity(e));
        assert_eq!(world.components().kind_count(), 0);
    }

    #[test]
    fn test_destroyed_entity_rejects_components() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Health(3));
        world.destroy_entity(e);

        assert!(!world.add_component(e, Health(4)));
        assert!(world.get_component::<Health>(e).is_none());
        assert!(!world.query::<Health>().contains(&e));
        assert_eq!(world.query_data::<Health>().count(), 0);
    }

    #[test]
    fn test_add_component_to_missing_entity_is_noop() {
        let mut world = World::new();
        let ghost = Entity::from_raw(99);
        assert!(!world.add_component(ghost, Health(1)));
        assert!(world.query::<Health>().is_empty());
        assert!(!world.remove_component::<Health>(ghost));
    }

    #[test]
    fn test_duplicate_add_keeps_original() {
        let mut world = World::new();
        let e = world.create_entity();
        assert!(world.add_component(e, Health(5)));
        assert!(!world.add_component(e, Health(7)));
        assert_eq!(world.get_component::<Health>(e), Some(&Health(5)));
    }

    #[test]
    fn test_remove_component_then_missing() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Armor(2));
        assert!(world.remove_component::<Armor>(e));
        assert!(!world.remove_component::<Armor>(e));
        assert!(world.get_component::<Armor>(e).is_none());
        assert!(!world.has_component::<Armor>(e));
    }

    #[test]
    fn test_entity_ids_are_not_reused() {
        let mut world = World::new();
        assert_eq!(world.create_entity().raw(), 0);
        let e1 = world.create_entity();
        assert_eq!(e1.raw(), 1);
        assert_eq!(world.create_entity().raw(), 2);
        world.destroy_entity(e1);
        assert_eq!(world.create_entity().raw(), 3);
    }

    #[test]
    fn test_entity_names() {
        let mut world = World::new();
        let named = world.create_named_entity("Player One");
        let anonymous = world.create_transform_entity(None);
        let blank = world.create_named_entity("");

        assert_eq!(world.try_get_entity_name(named), "Player One");
        assert_eq!(world.try_get_entity_name(anonymous), "");
        assert_eq!(world.try_get_entity_name(blank), "");
        assert_eq!(world.try_get_entity_name(Entity::from_raw(42)), "");
        assert!(world.has_component::<Transform>(anonymous));
        assert!(!world.has_component::<Name>(anonymous));
    }

    #[test]
    fn test_query_data_tracks_latest_values() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        world.add_component(a, Health(1));
        world.add_component(b, Health(2));
        world.add_component(b, Armor(3));

        if let Some(h) = world.get_component_mut::<Health>(a) {
            h.0 = 11;
        }
        let values: Vec<_> = world.query_data::<Health>().map(|(e, h)| (e, h.0)).collect();
        assert_eq!(values.len(), 2);
        assert!(values.contains(&(a, 11)));
        assert!(values.contains(&(b, 2)));

        let pairs: Vec<_> = world.query_data2::<Health, Armor>().collect();
        assert_eq!(pairs, vec![(b, &Health(2), &Armor(3))]);
    }

    #[test]
    fn test_update_only_system_skips_other_phases() {
        let calls = Calls::default();
        let mut world = World::new();
        world.add_system(UpdateOnly(calls.clone()));

        world.call_awake();
        world.call_fixed_update();
        world.call_render();
        world.call_unload();
        assert_eq!(Calls::get(&calls.update), 0);

        world.call_update();
        assert_eq!(Calls::get(&calls.update), 1);
        assert_eq!(world.subscriber_count(Phase::Update), 1);
        assert_eq!(world.subscriber_count(Phase::Render), 0);
    }

    #[test]
    fn test_update_and_render_called_once_per_sweep() {
        let calls = Calls::default();
        let mut world = World::new();
        world.add_system(UpdateAndRender(calls.clone()));

        world.call_update();
        assert_eq!(Calls::get(&calls.update), 1);
        assert_eq!(Calls::get(&calls.render), 0);

        world.call_render();
        assert_eq!(Calls::get(&calls.update), 1);
        assert_eq!(Calls::get(&calls.render), 1);
    }

    #[test]
    fn test_every_phase_reaches_full_system() {
        let calls = Calls::default();
        let mut world = World::new();
        world.add_system(Everything(calls.clone()));
        for phase in Phase::ALL {
            world.run_phase(phase);
        }
        for counter in [&calls.awake, &calls.update, &calls.fixed, &calls.unload, &calls.render] {
            assert_eq!(Calls::get(counter), 1);
        }
    }

    #[test]
    fn test_phase_runs_in_registration_order() {
        let log = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let mut world = World::new();
        for label in ["first", "second", "third"] {
            world.add_system(Recorder {
                label,
                log: log.clone(),
            });
        }
        world.call_update();
        world.call_update();
        assert_eq!(
            *log.lock(),
            vec!["first", "second", "third", "first", "second", "third"]
        );
    }

    #[test]
    fn test_system_added_mid_sweep_joins_next_sweep() {
        let calls = Calls::default();
        let mut world = World::new();
        world.add_system(Spawner {
            calls: calls.clone(),
            spawned: false,
        });

        world.call_update();
        assert_eq!(Calls::get(&calls.update), 0);
        assert_eq!(world.system_count(), 2);

        world.call_update();
        assert_eq!(Calls::get(&calls.update), 1);
    }

    #[test]
    fn test_hook_sees_registered_systems() {
        let introspect = Introspect::default();
        let mut world = World::new();
        world.add_system(introspect.clone());

        world.call_update();
        assert_eq!(introspect.seen_count.load(Ordering::SeqCst), 1);
        assert!(introspect.seen_self.load(Ordering::SeqCst));
    }

    #[test]
    fn test_queued_system_counts_before_it_joins() {
        let calls = Calls::default();
        let introspect = Introspect::default();
        let mut world = World::new();
        world.add_system(Spawner {
            calls: calls.clone(),
            spawned: false,
        });
        world.add_system(introspect.clone());

        world.call_update();
        assert_eq!(introspect.seen_count.load(Ordering::SeqCst), 3);
        assert!(world.has_system("UpdateOnly"));
        assert_eq!(
            world.system_names(),
            vec!["Spawner", "Introspect", "UpdateOnly"]
        );
    }

    #[test]
    fn test_nested_sweep_reaches_other_systems() {
        let outer = Calls::default();
        let other = Calls::default();
        let mut world = World::new();
        world.add_system(NestedRender(outer.clone()));
        world.add_system(UpdateAndRender(other.clone()));

        world.call_update();
        assert_eq!(Calls::get(&outer.render), 0);
        assert_eq!(Calls::get(&other.render), 1);
        assert_eq!(Calls::get(&other.update), 1);

        world.call_render();
        assert_eq!(Calls::get(&outer.render), 1);
        assert_eq!(Calls::get(&other.render), 2);
    }

    #[test]
    fn test_sweeps_are_profiled_per_system() {
        let mut world = World::new();
        world.add_system(Regen);
        world.call_update();
        world.call_update();
        world.call_render();

        assert_eq!(world.profiler().timing("update", "Regen").calls, 2);
        assert_eq!(world.profiler().timing("render", "Regen").calls, 0);
    }

    #[test]
    fn test_systems_mutate_through_queries() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, Health(0));
        world.add_system(Regen);

        world.call_update();
        world.call_update();
        assert_eq!(world.get_component::<Health>(e), Some(&Health(2)));
    }

    #[test]
    fn test_from_registry_aborts_on_failure() {
        let mut registry = SystemRegistry::new();
        registry
            .register("Regen", || Ok(Box::new(Regen) as Box<dyn System>))
            .unwrap();
        registry
            .register("Broken", || Err("no device".into()))
            .unwrap();
        assert!(matches!(
            World::from_registry(&registry),
            Err(WorldError::Registration(SystemRegistrationError::Construction { .. }))
        ));
    }

    #[test]
    fn test_from_registry_keeps_order() {
        let mut registry = SystemRegistry::new();
        registry.register("Regen", || Ok(Box::new(Regen) as Box<dyn System>)).unwrap();
        registry
            .register("Everything", || {
                Ok(Box::new(Everything(Calls::default())) as Box<dyn System>)
            })
            .unwrap();
        let world = World::from_registry(&registry).unwrap();
        assert_eq!(world.system_names(), vec!["Regen", "Everything"]);
        assert_eq!(world.subscriber_count(Phase::Update), 2);
        assert_eq!(world.subscriber_count(Phase::Awake), 1);
    }

    #[test]
    fn test_shared_world_identity() {
        let a = SharedWorld::new(World::new());
        let b = a.clone();
        let c = SharedWorld::new(World::new());
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));

        let e = a.write().create_entity();
        assert!(b.read().entity_exists(e));
    }
}
