// component.rs - Component kinds and the type-erased component view
//
// Components are identified by small u32 kind ids rather than Rust TypeIds.
// Ids are stable across builds, so saved worlds and tools can refer to a
// kind without knowing the Rust type behind it.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::any::Any;

pub type ComponentId = u32;

/// Component fields flattened into a JSON object, keyed by field name.
pub type PropertyBag = Map<String, Value>;

/// Kind ids below this value are reserved for built-in components.
pub const FIRST_USER_COMPONENT_ID: ComponentId = 100;

/// Trait for plain-data components.
///
/// A component holds no reference to the entity it is attached to; the
/// association lives entirely in the world's component store.
pub trait Component: 'static + Sized + Send + Sync + Serialize + DeserializeOwned {
    /// Unique kind id.
    const ID: ComponentId;

    /// Human-readable kind name, also used as the persisted type name.
    const NAME: &'static str;

    /// Flatten this component into a property bag.
    fn to_properties(&self) -> Result<PropertyBag, serde_json::Error> {
        Ok(match serde_json::to_value(self)? {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        })
    }

    /// Rebuild a component from a property bag produced by `to_properties`.
    fn from_properties(properties: &PropertyBag) -> Result<Self, serde_json::Error> {
        match serde_json::from_value(Value::Object(properties.clone())) {
            Ok(component) => Ok(component),
            Err(err) => match properties.get("value") {
                Some(inner) if properties.len() == 1 => serde_json::from_value(inner.clone()),
                _ => Err(err),
            },
        }
    }
}

/// Object-safe view over any component instance.
pub trait AnyComponent: Send + Sync {
    fn kind(&self) -> ComponentId;
    fn kind_name(&self) -> &'static str;
    fn properties(&self) -> Result<PropertyBag, serde_json::Error>;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Component> AnyComponent for T {
    fn kind(&self) -> ComponentId {
        T::ID
    }

    fn kind_name(&self) -> &'static str {
        T::NAME
    }

    fn properties(&self) -> Result<PropertyBag, serde_json::Error> {
        self.to_properties()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn AnyComponent + '_ {
    /// Typed view, `None` when the instance is of another kind.
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Helper macro to implement the Component trait.
///
/// # Example
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize)]
/// struct Health { current: f32 }
///
/// define_component!(Health, 120, "Health");
/// ```
#[macro_export]
macro_rules! define_component {
    ($ty:ty, $id:expr, $name:expr) => {
        impl $crate::ecs::Component for $ty {
            const ID: $crate::ecs::ComponentId = $id;
            const NAME: &'static str = $name;
        }
    };
}
