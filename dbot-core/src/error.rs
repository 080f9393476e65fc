use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DbotError>;
