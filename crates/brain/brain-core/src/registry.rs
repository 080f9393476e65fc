//! # Brain Registry
//!
//! Maps backend names to factories. Built once at startup, then shared read-only.
//!
//! `register` takes `&mut self` and `resolve` takes `&self`, so all registration has to
//! finish before the registry is handed to anything that resolves backends.
//!
//! ## Resolution order
//!
//! 1. An exact name match wins, however many backends are registered.
//! 2. An empty registry fails with [`BrainError::NoneAvailable`].
//! 3. An empty name picks the only backend, or fails with [`BrainError::Ambiguous`].
//! 4. Anything else fails with [`BrainError::Unknown`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::brain::Brain;
use crate::config::BrainConfig;
use crate::error::{BrainError, Result};

/// Zero-argument constructor of a brain. Each call returns a fresh instance.
pub type BrainFactory = Arc<dyn Fn() -> Arc<dyn Brain> + Send + Sync>;

/// Named table of brain factories.
#[derive(Clone, Default)]
pub struct BrainRegistry {
    factories: HashMap<String, BrainFactory>,
    /// Names in registration order.
    order: Vec<String>,
}

impl BrainRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`.
    ///
    /// Fails with [`BrainError::EmptyName`] or [`BrainError::AlreadyRegistered`]. Both are
    /// configuration errors: propagate them out of startup instead of recovering.
    pub fn register<F>(&mut self, name: &str, factory: F) -> Result<()>
    where
        F: Fn() -> Arc<dyn Brain> + Send + Sync + 'static,
    {
        if name.is_empty() {
            return Err(BrainError::EmptyName);
        }
        if self.factories.contains_key(name) {
            return Err(BrainError::AlreadyRegistered(name.to_string()));
        }

        self.factories.insert(name.to_string(), Arc::new(factory));
        self.order.push(name.to_string());
        info!(brain = %name, total = self.order.len(), "Brain registered");
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(mut self, name: &str, factory: F) -> Result<Self>
    where
        F: Fn() -> Arc<dyn Brain> + Send + Sync + 'static,
    {
        self.register(name, factory)?;
        Ok(self)
    }

    /// Picks the factory for `name`; an empty name means "the only registered backend".
    pub fn resolve(&self, name: &str) -> Result<BrainFactory> {
        if let Some(factory) = self.factories.get(name) {
            debug!(brain = %name, "Brain resolved by name");
            return Ok(factory.clone());
        }

        if self.factories.is_empty() {
            warn!(brain = %name, "Brain resolution failed: registry is empty");
            return Err(BrainError::NoneAvailable);
        }

        if name.is_empty() {
            if self.order.len() == 1 {
                let only = &self.order[0];
                debug!(brain = %only, "Brain resolved as the single registered backend");
                return Ok(self.factories[only].clone());
            }
            warn!(
                available = ?self.order,
                "Brain resolution failed: no name given and several backends registered"
            );
            return Err(BrainError::Ambiguous);
        }

        warn!(brain = %name, available = ?self.order, "Brain resolution failed: unknown name");
        Err(BrainError::Unknown(name.to_string()))
    }

    /// Resolves `name` and builds a new brain from its factory.
    pub fn open(&self, name: &str) -> Result<Arc<dyn Brain>> {
        let factory = self.resolve(name)?;
        let brain = factory();
        info!(brain = %name, "step: brain opened");
        Ok(brain)
    }

    /// [`open`](Self::open) with the name from `config`.
    pub fn open_from_config(&self, config: &dyn BrainConfig) -> Result<Arc<dyn Brain>> {
        self.open(config.brain_name())
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Debug for BrainRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrainRegistry")
            .field("names", &self.order)
            .finish()
    }
}
