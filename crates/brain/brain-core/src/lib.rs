//! # Brain Core
//!
//! Core types and traits for pluggable key-value storage ("brains").
//! Backends such as `brain-memory` implement [`Brain`] and register a factory in a
//! [`BrainRegistry`]; the bot resolves one by name at startup.
//!
//! ## Modules
//!
//! - [`brain`] - Brain trait
//! - [`registry`] - BrainRegistry, BrainFactory
//! - [`config`] - BrainConfig trait and env-based implementation
//! - [`codec`] - JSON values on top of any brain
//! - [`error`] - BrainError

pub mod brain;
pub mod codec;
pub mod config;
pub mod error;
pub mod registry;


pub use brain::Brain;
pub use codec::{get_json, set_json};
pub use config::{BrainConfig, EnvBrainConfig};
pub use error::{BrainError, Result};
pub use registry::{BrainFactory, BrainRegistry};
