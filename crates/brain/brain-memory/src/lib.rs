//! # In-Memory Brain
//!
//! This crate provides the `"memory"` backend for the [`Brain`] trait from `brain-core`.
//!
//! ## MemoryBrain
//!
//! Volatile key-value storage that lives as long as the process.
//!
//! **Limitations**:
//! - Data is lost on restart
//! - No capacity bound or eviction
//!
//! ## Example
//!
//! ```rust
//! use brain_core::BrainRegistry;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let mut registry = BrainRegistry::new();
//!     brain_memory::register(&mut registry)?;
//!
//!     let brain = registry.open("")?;
//!     brain.set("greeting", b"hello".to_vec()).await?;
//!     assert_eq!(brain.get("greeting").await, b"hello".to_vec());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Thread Safety
//!
//! Every operation takes the same `Mutex`, so calls on one instance are fully serialized.

use brain_core::{Brain, BrainRegistry, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;


/// Name the memory backend registers under.
pub const MEMORY_BRAIN_NAME: &str = "memory";

/// In-memory brain backed by a single mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryBrain {
    items: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBrain {
    /// Creates a new empty memory brain.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of stored keys.
    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Returns true if `key` is stored, including when its value is empty.
    ///
    /// [`Brain::get`] cannot make that distinction on its own.
    pub async fn contains_key(&self, key: &str) -> bool {
        self.items.lock().await.contains_key(key)
    }

    /// Removes every key.
    pub async fn clear(&self) {
        self.items.lock().await.clear();
    }
}

#[async_trait::async_trait]
impl Brain for MemoryBrain {
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut items = self.items.lock().await;
        debug!(key = %key, len = value.len(), "Memory brain set");
        items.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Vec<u8> {
        let items = self.items.lock().await;
        let value = items.get(key).cloned();
        debug!(key = %key, found = value.is_some(), "Memory brain get");
        value.unwrap_or_default()
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().await;
        let removed = items.remove(key).is_some();
        debug!(key = %key, removed, "Memory brain remove");
        Ok(())
    }
}

/// Factory for the registry: a fresh, empty brain per call.
pub fn factory() -> Arc<dyn Brain> {
    Arc::new(MemoryBrain::new())
}

/// Registers the memory backend under [`MEMORY_BRAIN_NAME`].
pub fn register(registry: &mut BrainRegistry) -> Result<()> {
    registry.register(MEMORY_BRAIN_NAME, factory)
}
