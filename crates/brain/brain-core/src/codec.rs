//! JSON values on top of a [`Brain`].
//!
//! A brain only stores bytes; these helpers let chat components keep any serde type
//! (e.g. a message) under a key. Since `get` cannot tell a missing key from an empty value,
//! empty bytes decode to `None`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::brain::Brain;
use crate::error::Result;

/// Serializes `value` as JSON and stores it under `key`.
pub async fn set_json<T>(brain: &dyn Brain, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    debug!(key = %key, len = bytes.len(), "Storing JSON value in brain");
    brain.set(key, bytes).await
}

/// Loads the JSON value under `key`. Returns `Ok(None)` when nothing is stored.
pub async fn get_json<T>(brain: &dyn Brain, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let bytes = brain.get(key).await;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&bytes)?))
}
