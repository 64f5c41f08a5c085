//! News source trait
//!
//! Defines the upstream collaborator that supplies articles and categories.

use crate::error::Result;
use newsdesk::model::{Article, ArticleId, Category};

/// A source of news articles and categories
///
/// Implementations return already-parsed data; the stores never perform
/// network I/O themselves.
pub trait NewsSource: Send + Sync {
    /// Display name for the source (e.g., "Backend API")
    fn name(&self) -> &'static str;

    /// Fetch the current article collection
    fn fetch_articles(&self) -> Result<Vec<Article>>;

    /// Look up a single article by id
    fn fetch_article(&self, id: ArticleId) -> Result<Option<Article>>;

    /// Fetch the selectable categories
    fn fetch_categories(&self) -> Result<Vec<Category>>;
}
