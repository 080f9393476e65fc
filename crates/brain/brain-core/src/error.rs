//! Brain error types.
//!
//! Registration errors are startup-fatal; resolution errors are returned to the caller.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrainError {
    #[error("brain must have a name")]
    EmptyName,

    #[error("brain named {0} already registered")]
    AlreadyRegistered(String),

    #[error("no Brain available")]
    NoneAvailable,

    #[error("multiple brains available; must choose one")]
    Ambiguous,

    #[error("unknown brain '{0}'")]
    Unknown(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BrainError {
    /// True for errors raised while registering backends. The process should not keep
    /// running with a half-built registry.
    pub fn is_registration(&self) -> bool {
        matches!(self, BrainError::EmptyName | BrainError::AlreadyRegistered(_))
    }
}

impl From<serde_json::Error> for BrainError {
    fn from(e: serde_json::Error) -> Self {
        BrainError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BrainError>;
