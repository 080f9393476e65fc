//! # Brain
//!
//! The storage interface every backend implements.
//!
//! Semantics callers must be aware of:
//! - `get` on a missing key returns an empty vec, so a stored empty value and a missing key
//!   look the same through `get` alone.
//! - `remove` on a missing key is a no-op and succeeds.

use async_trait::async_trait;

use crate::error::Result;

/// Key-value storage backend used by the bot.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Stores `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Returns the value stored under `key`, or an empty vec if there is none.
    async fn get(&self, key: &str) -> Vec<u8>;

    /// Deletes `key`. Missing keys are ignored.
    async fn remove(&self, key: &str) -> Result<()>;
}
