//! Application composition
//!
//! `AppContext` owns the stores and the router and is handed to whatever
//! drives the app. `sync` pushes upstream data into the stores.

pub mod context;
pub mod sync;
pub mod view;

pub use context::AppContext;
pub use sync::{article_detail, refresh, SyncReport};
pub use view::View;
