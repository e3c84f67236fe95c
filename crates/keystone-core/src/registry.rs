//! Explicit dependency wiring.
//!
//! Components are constructed once at startup, registered here and handed
//! out as `Arc` handles. The registry replaces function-local singletons:
//! its lifetime, and therefore theirs, is owned by the application.

use std::any::{Any, TypeId};
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::error::AppError;
use crate::result::AppResult;
use crate::traits::Service;

/// Type-keyed container of shared services.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service. Registering the same type twice is a conflict.
    pub fn register<S: Service>(&self, service: Arc<S>) -> AppResult<()> {
        let name = service.name();
        match self.services.entry(TypeId::of::<S>()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Service '{name}' is already registered"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(service);
                tracing::info!("Registered service '{}'", name);
                Ok(())
            }
        }
    }

    /// Fetch a registered service, if present.
    pub fn get<S: Service>(&self) -> Option<Arc<S>> {
        self.services
            .get(&TypeId::of::<S>())
            .and_then(|entry| Arc::clone(entry.value()).downcast::<S>().ok())
    }

    /// Fetch a registered service or fail with `NotFound`.
    pub fn require<S: Service>(&self) -> AppResult<Arc<S>> {
        self.get::<S>().ok_or_else(|| {
            AppError::not_found(format!(
                "Service '{}' is not registered",
                std::any::type_name::<S>()
            ))
        })
    }

    /// Whether a service of type `S` is registered.
    pub fn contains<S: Service>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<S>())
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
