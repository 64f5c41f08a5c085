//! Data persistence
//!
//! Native stand-in for browser local storage.

pub mod file_storage;

// Re-export common types
pub use file_storage::{config_dir, ensure_config_dir, FileStorage};
