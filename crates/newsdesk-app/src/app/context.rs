//! Application context
//!
//! Owns both stores and the router. Built once at startup over a shared
//! storage and passed to callers instead of living in globals.

use crate::data::FileStorage;
use crate::error::Result;
use newsdesk::model::Article;
use newsdesk::router::Router;
use newsdesk::store::{CategoryStore, NewsStore, Storage};
use std::path::PathBuf;
use std::sync::Arc;

use super::view::View;

pub struct AppContext {
    pub news: NewsStore,
    pub categories: CategoryStore,
    router: Router,
}

impl AppContext {
    /// Build the context over `storage`, rehydrating both stores
    pub fn new(storage: Arc<dyn Storage>) -> Result<Self> {
        let router = Router::standard()?;
        let news = NewsStore::load(storage.clone());
        let categories = CategoryStore::load(storage);

        tracing::info!(
            favorites = news.favorites().len(),
            categories = categories.category_list().len(),
            routes = router.routes().len(),
            "app context ready"
        );

        Ok(Self {
            news,
            categories,
            router,
        })
    }

    /// Build the context over file storage in `data_dir`, or the default
    /// config directory
    pub fn open(data_dir: Option<PathBuf>) -> Result<Self> {
        let storage = match data_dir {
            Some(dir) => FileStorage::new(dir),
            None => FileStorage::open_default()?,
        };
        tracing::debug!(dir = ?storage.dir(), "using file storage");
        Self::new(Arc::new(storage))
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Resolve a path to a view
    pub fn navigate(&self, path: &str) -> Option<View> {
        let view = self
            .router
            .match_path(path)
            .and_then(|m| View::from_match(&m));
        if view.is_none() {
            tracing::debug!(path, "no route matched");
        }
        view
    }

    /// Loaded articles under the active filter selection
    pub fn visible_articles(&self) -> Vec<&Article> {
        self.news.filtered(self.categories.filters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk::model::FilterSelection;
    use newsdesk::store::MemoryStorage;

    fn context() -> AppContext {
        AppContext::new(Arc::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn test_fresh_context_defaults() {
        let ctx = context();
        assert!(ctx.news.favorites().is_empty());
        assert!(ctx.news.articles().is_empty());
        assert_eq!(ctx.categories.filters(), &FilterSelection::default());
        assert!(ctx.categories.category_list().is_empty());
        assert_eq!(ctx.router().routes().len(), 6);
    }

    #[test]
    fn test_navigate() {
        let ctx = context();
        assert_eq!(ctx.navigate("/news/5"), Some(View::News { id: 5 }));
        assert_eq!(ctx.navigate("/unknown"), None);
    }

    #[test]
    fn test_stores_share_storage() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut ctx = AppContext::new(storage.clone()).unwrap();
            ctx.news.add_favorite(1);
            ctx.categories.set_filters(FilterSelection::new().city("Kazan"));
        }
        assert_eq!(storage.len(), 2);

        let ctx = AppContext::new(storage).unwrap();
        assert!(ctx.news.is_favorite(1));
        assert_eq!(ctx.categories.filters().city.as_deref(), Some("Kazan"));
    }

    #[test]
    fn test_visible_articles_follow_filters() {
        let mut ctx = context();
        ctx.news.replace_articles(vec![
            Article::new(1, "b", 5, 1),
            Article::new(2, "a", 6, 1),
            Article::new(3, "c", 5, 1),
        ]);
        assert_eq!(ctx.visible_articles().len(), 3);

        ctx.categories
            .set_filters(FilterSelection::new().category(5).sort("title"));
        let ids: Vec<_> = ctx.visible_articles().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
