//! Upstream synchronization
//!
//! Pulls categories and articles from a `NewsSource` and pushes them into
//! the stores through their update actions.

use crate::error::Result;
use crate::providers::NewsSource;
use newsdesk::model::{Article, ArticleId};
use newsdesk::store::recompute_liked_flags;

use super::context::AppContext;

/// Counts from one refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub articles: usize,
    pub categories: usize,
    /// Loaded articles that are favorites
    pub liked: usize,
}

/// Fetch categories and articles, then replace both in the stores
///
/// Both fetches complete before either store changes, so a failed fetch
/// leaves the context untouched.
pub fn refresh(ctx: &mut AppContext, source: &dyn NewsSource) -> Result<SyncReport> {
    tracing::info!(source = source.name(), "refreshing news");

    let categories = source.fetch_categories()?;
    let articles = source.fetch_articles()?;

    let report_categories = categories.len();
    ctx.categories.set_category_list(categories);
    ctx.news.replace_articles(articles);

    let report = SyncReport {
        articles: ctx.news.articles().len(),
        categories: report_categories,
        liked: ctx.news.list_favorites().len(),
    };
    tracing::info!(?report, "refresh complete");
    Ok(report)
}

/// Article for the detail view
///
/// Served from the loaded collection when present, otherwise fetched from
/// the source with its liked flag derived from the favorites set. The
/// loaded collection is not modified.
pub fn article_detail(
    ctx: &AppContext,
    source: &dyn NewsSource,
    id: ArticleId,
) -> Result<Option<Article>> {
    if let Some(article) = ctx.news.article(id) {
        return Ok(Some(article.clone()));
    }

    let Some(article) = source.fetch_article(id)? else {
        return Ok(None);
    };
    let mut fetched = [article];
    recompute_liked_flags(&mut fetched, ctx.news.favorites());
    let [article] = fetched;
    Ok(Some(article))
}
