//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Each variant is one failure kind of the service. The HTTP layer maps
/// variants to status codes, so a status change touches only that mapping.
#[derive(Error, Debug)]
pub enum Error {
    /// The request is missing a usable `user` value
    #[error("{0}")]
    Validation(String),

    /// The username is already present in the store
    #[error("{0}")]
    Conflict(String),

    /// Reading or writing the store failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
