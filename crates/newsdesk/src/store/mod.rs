//! Persisted state stores
//!
//! Two independent containers, each rehydrated from a `Storage` at creation
//! and written through on every mutation.

pub mod categories;
pub mod liked;
pub mod news;
pub mod storage;

// Re-export common types
pub use categories::CategoryStore;
pub use liked::recompute_liked_flags;
pub use news::NewsStore;
pub use storage::{load_json, save_json, MemoryStorage, Storage};
