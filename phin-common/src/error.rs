//! Common error types for PhinAccords services
//!
//! HTTP handlers carry their own response-shaped error enums; this type
//! only covers the shared library concerns (storage, I/O, configuration).

use thiserror::Error;

/// Common result type for PhinAccords operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across PhinAccords services
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
