//! Error types for Newsdesk
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for the Newsdesk core
#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Route error: {0}")]
    Route(String),
}

/// Result type alias for Newsdesk
pub type Result<T> = std::result::Result<T, NewsError>;
