//! News store
//!
//! Owns the loaded article collection and the favorites set, and keeps the
//! articles' `is_liked` flags consistent with the set.

use crate::config::keys::FAVORITES;
use crate::model::{Article, ArticleId, FilterSelection};
use crate::query;
use crate::store::liked::recompute_liked_flags;
use crate::store::storage::{load_json, save_json, Storage};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Article collection plus the persisted favorites set
pub struct NewsStore {
    storage: Arc<dyn Storage>,
    /// Currently loaded articles, empty until the first `replace_articles`
    articles: Vec<Article>,
    /// Favorited article ids in insertion order
    favorites: Vec<ArticleId>,
}

impl NewsStore {
    /// Create a store and rehydrate the favorites set from `storage`
    ///
    /// Missing or corrupt favorites data yields an empty set.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let favorites: Vec<ArticleId> = load_json(storage.as_ref(), FAVORITES).unwrap_or_default();
        tracing::debug!(count = favorites.len(), "rehydrated favorites");

        Self {
            storage,
            articles: Vec::new(),
            favorites,
        }
    }

    /// Replace the article collection and derive liked flags for it
    pub fn replace_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        recompute_liked_flags(&mut self.articles, &self.favorites);
        tracing::debug!(count = self.articles.len(), "articles replaced");
    }

    /// Add an article id to the favorites set
    ///
    /// Returns false (and does nothing) if the id was already a favorite.
    pub fn add_favorite(&mut self, id: ArticleId) -> bool {
        if self.favorites.contains(&id) {
            return false;
        }

        self.favorites.push(id);
        recompute_liked_flags(&mut self.articles, &self.favorites);
        self.persist_favorites();
        true
    }

    /// Remove an article id from the favorites set
    ///
    /// Returns whether the id was present. The set is persisted either way.
    pub fn remove_favorite(&mut self, id: ArticleId) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|&f| f != id);
        let removed = self.favorites.len() != before;

        recompute_liked_flags(&mut self.articles, &self.favorites);
        self.persist_favorites();
        removed
    }

    /// Toggle favorite status for an article id
    ///
    /// Returns true if the id is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: ArticleId) -> bool {
        if self.is_favorite(id) {
            self.remove_favorite(id);
            false
        } else {
            self.add_favorite(id);
            true
        }
    }

    /// Loaded articles that are in the favorites set
    ///
    /// Favorites whose article is not currently loaded are not included.
    pub fn list_favorites(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| self.favorites.contains(&a.id))
            .collect()
    }

    /// Up to `count` distinct loaded articles chosen uniformly at random
    pub fn sample_random(&self, count: usize) -> Vec<&Article> {
        self.sample_random_with(count, &mut rand::rng())
    }

    /// Like `sample_random`, drawing from the given generator
    pub fn sample_random_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Article> {
        if self.articles.is_empty() {
            tracing::debug!("no articles loaded, random sample is empty");
            return Vec::new();
        }

        let mut shuffled: Vec<&Article> = self.articles.iter().collect();
        shuffled.shuffle(rng);
        shuffled.truncate(count);
        shuffled
    }

    /// Loaded articles matching a filter selection, in its sort order
    pub fn filtered(&self, filters: &FilterSelection) -> Vec<&Article> {
        query::apply(&self.articles, filters)
    }

    /// All loaded articles
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Look up a loaded article by id
    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// The favorites set in insertion order
    pub fn favorites(&self) -> &[ArticleId] {
        &self.favorites
    }

    /// Check if an article id is a favorite
    pub fn is_favorite(&self, id: ArticleId) -> bool {
        self.favorites.contains(&id)
    }

    fn persist_favorites(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), FAVORITES, &self.favorites) {
            tracing::warn!(error = %e, "failed to persist favorites");
        }
    }
}
