//! Network operations
//!
//! HTTP client used by the backend news source.

pub mod client;

// Re-export commonly used types
pub use client::HttpClient;
