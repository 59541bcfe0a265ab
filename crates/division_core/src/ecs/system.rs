// system.rs - Systems and their lifecycle capabilities
//
// A system opts into a lifecycle phase by implementing that phase's trait
// and exposing it through the matching `as_*` accessor. The scheduler asks
// each accessor once, at registration, and never calls a phase the system
// did not opt into.

use crate::ecs::World;
use std::fmt;

/// One named point in the per-tick lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Awake,
    Update,
    FixedUpdate,
    Unload,
    Render,
}

impl Phase {
    /// Every phase in lifecycle order.
    pub const ALL: [Phase; 5] = [
        Phase::Awake,
        Phase::Update,
        Phase::FixedUpdate,
        Phase::Unload,
        Phase::Render,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Awake => "awake",
            Phase::Update => "update",
            Phase::FixedUpdate => "fixed_update",
            Phase::Unload => "unload",
            Phase::Render => "render",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs once when the engine starts.
pub trait Awake {
    fn awake(&mut self, world: &mut World);
}

/// Runs once per frame.
pub trait Update {
    fn update(&mut self, world: &mut World);
}

/// Runs once per frame, after every Update.
pub trait FixedUpdate {
    fn fixed_update(&mut self, world: &mut World);
}

/// Runs when the world is being torn down.
pub trait Unload {
    fn unload(&mut self, world: &mut World);
}

/// Runs on the render tick, before draw data is extracted.
pub trait Render {
    fn render(&mut self, world: &mut World);
}

/// A behavior unit owned by exactly one world.
///
/// Implement the phase traits you need, then use [`impl_system!`] to wire
/// them up:
///
/// ```ignore
/// struct Spin;
/// impl Update for Spin {
///     fn update(&mut self, world: &mut World) { /* ... */ }
/// }
/// impl_system!(Spin => Update);
/// ```
///
/// [`impl_system!`]: crate::impl_system
pub trait System: Send + Sync + 'static {
    /// Name used for registration, logging and profiling.
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    fn as_awake(&mut self) -> Option<&mut dyn Awake> {
        None
    }

    fn as_update(&mut self) -> Option<&mut dyn Update> {
        None
    }

    fn as_fixed_update(&mut self) -> Option<&mut dyn FixedUpdate> {
        None
    }

    fn as_unload(&mut self) -> Option<&mut dyn Unload> {
        None
    }

    fn as_render(&mut self) -> Option<&mut dyn Render> {
        None
    }
}

impl dyn System {
    /// Whether this system opted into `phase`.
    pub fn subscribes_to(&mut self, phase: Phase) -> bool {
        match phase {
            Phase::Awake => self.as_awake().is_some(),
            Phase::Update => self.as_update().is_some(),
            Phase::FixedUpdate => self.as_fixed_update().is_some(),
            Phase::Unload => self.as_unload().is_some(),
            Phase::Render => self.as_render().is_some(),
        }
    }

    /// Invoke this system's hook for `phase`. Returns false if it has none.
    pub fn run_phase(&mut self, phase: Phase, world: &mut World) -> bool {
        match phase {
            Phase::Awake => self.as_awake().map(|s| s.awake(world)).is_some(),
            Phase::Update => self.as_update().map(|s| s.update(world)).is_some(),
            Phase::FixedUpdate => self
                .as_fixed_update()
                .map(|s| s.fixed_update(world))
                .is_some(),
            Phase::Unload => self.as_unload().map(|s| s.unload(world)).is_some(),
            Phase::Render => self.as_render().map(|s| s.render(world)).is_some(),
        }
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Implement [`System`] for a type, opting it into the listed phases.
///
/// Each listed phase must have its trait implemented for the type.
///
/// ```ignore
/// impl_system!(CameraSystem => Awake, Render);
/// ```
#[macro_export]
macro_rules! impl_system {
    (@hook Awake) => {
        fn as_awake(&mut self) -> Option<&mut dyn $crate::ecs::Awake> {
            Some(self)
        }
    };
    (@hook Update) => {
        fn as_update(&mut self) -> Option<&mut dyn $crate::ecs::Update> {
            Some(self)
        }
    };
    (@hook FixedUpdate) => {
        fn as_fixed_update(&mut self) -> Option<&mut dyn $crate::ecs::FixedUpdate> {
            Some(self)
        }
    };
    (@hook Unload) => {
        fn as_unload(&mut self) -> Option<&mut dyn $crate::ecs::Unload> {
            Some(self)
        }
    };
    (@hook Render) => {
        fn as_render(&mut self) -> Option<&mut dyn $crate::ecs::Render> {
            Some(self)
        }
    };
    ($ty:ty => $($phase:ident),* $(,)?) => {
        impl $crate::ecs::System for $ty {
            $( $crate::impl_system!(@hook $phase); )*
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ticker;
    impl Update for Ticker {
        fn update(&mut self, _world: &mut World) {}
    }
    impl Render for Ticker {
        fn render(&mut self, _world: &mut World) {}
    }
    crate::impl_system!(Ticker => Update, Render);

    struct Idle;
    crate::impl_system!(Idle =>);

    #[test]
    fn test_subscriptions_follow_listed_phases() {
        let mut ticker: Box<dyn System> = Box::new(Ticker);
        assert!(ticker.subscribes_to(Phase::Update));
        assert!(ticker.subscribes_to(Phase::Render));
        assert!(!ticker.subscribes_to(Phase::Awake));
        assert!(!ticker.subscribes_to(Phase::FixedUpdate));
        assert!(!ticker.subscribes_to(Phase::Unload));

        let mut idle: Box<dyn System> = Box::new(Idle);
        assert!(Phase::ALL.iter().all(|p| !idle.subscribes_to(*p)));
    }

    #[test]
    fn test_default_name_is_short_type_name() {
        assert_eq!(Ticker.name(), "Ticker");
        assert_eq!(short_type_name("a::b::Thing<c::D>"), "Thing");
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::FixedUpdate.to_string(), "fixed_update");
        assert_eq!(Phase::ALL[Phase::Render.index()], Phase::Render);
    }
}
