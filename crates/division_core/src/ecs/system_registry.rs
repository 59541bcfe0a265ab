// system_registry.rs - Explicit, ordered list of system factories
//
// The host application decides which systems a world gets by listing them
// here. Order of registration is the order systems run within a phase.

use crate::ecs::system_registration_error::BoxError;
use crate::ecs::{System, SystemRegistrationError};
use std::collections::HashSet;

type Factory = Box<dyn Fn() -> Result<Box<dyn System>, BoxError> + Send + Sync>;

pub struct SystemRegistry {
    entries: Vec<RegisteredFactory>,
    names: HashSet<String>,
}

struct RegisteredFactory {
    name: String,
    factory: Factory,
}

impl SystemRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Register a fallible factory under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), SystemRegistrationError>
    where
        F: Fn() -> Result<Box<dyn System>, BoxError> + Send + Sync + 'static,
    {
        let name = name.into();
        if !self.names.insert(name.clone()) {
            return Err(SystemRegistrationError::DuplicateName { name });
        }
        self.entries.push(RegisteredFactory {
            name,
            factory: Box::new(factory),
        });
        Ok(())
    }

    /// Register an infallible system built from its `Default`.
    pub fn register_default<S>(&mut self) -> Result<(), SystemRegistrationError>
    where
        S: System + Default,
    {
        let name = S::default().name();
        self.register(name, || Ok(Box::new(S::default()) as Box<dyn System>))
    }

    /// Build every registered system in order, stopping at the first failure.
    pub fn instantiate(&self) -> Result<Vec<Box<dyn System>>, SystemRegistrationError> {
        self.entries
            .iter()
            .map(|entry| {
                (entry.factory)().map_err(|source| SystemRegistrationError::Construction {
                    name: entry.name.clone(),
                    source,
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

impl Default for SystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SystemRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
