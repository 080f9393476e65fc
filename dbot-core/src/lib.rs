//! # dbot-core
//!
//! Core chat types for the bot: [`Message`], [`User`], [`Location`], the [`DbotError`] type
//! and tracing initialization. Transport-agnostic; storage lives in the brain crates.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{Location, Message, User};
