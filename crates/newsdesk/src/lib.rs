//! Newsdesk: news browsing state
//!
//! Favorites and filter stores persisted through a key-value storage port,
//! article queries, and the application route table.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use newsdesk::store::{MemoryStorage, NewsStore};
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let mut news = NewsStore::load(storage);
//! news.add_favorite(7);
//! assert!(news.is_favorite(7));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod router;
pub mod store;
