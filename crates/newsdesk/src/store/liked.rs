//! Derived liked flags
//!
//! The favorites set is the only source of truth for `is_liked`; every
//! action that changes the article collection or the set funnels through
//! `recompute_liked_flags`.

use crate::model::{Article, ArticleId};
use std::collections::HashSet;

/// Set each article's `is_liked` to its id's membership in `favorites`
pub fn recompute_liked_flags(articles: &mut [Article], favorites: &[ArticleId]) {
    let favorites: HashSet<ArticleId> = favorites.iter().copied().collect();
    for article in articles.iter_mut() {
        article.is_liked = favorites.contains(&article.id);
    }
}
