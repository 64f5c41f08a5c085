//! News sources
//!
//! Upstream collaborators that fetch articles and categories.

pub mod api;
pub mod traits;
pub mod types;

// Re-exports
pub use api::ApiNewsSource;
pub use traits::NewsSource;
pub use types::{Listing, Page};
