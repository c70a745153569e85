//! Error types for worksheet model operations

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Random source exhausted after {drawn} samples")]
    RandomSourceExhausted { drawn: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
