//! Article filtering and sorting
//!
//! Applies a `FilterSelection` to the loaded articles.

use crate::model::{Article, FilterSelection, SortOrder};
use std::cmp::Ordering;

/// Articles matching `filters`, ordered by its sort criterion
///
/// An unset or unrecognized sort keeps load order.
pub fn apply<'a>(articles: &'a [Article], filters: &FilterSelection) -> Vec<&'a Article> {
    let mut matched: Vec<&Article> = articles.iter().filter(|a| matches(a, filters)).collect();

    if let Some(order) = filters.sort_order() {
        sort(&mut matched, order);
    }

    matched
}

/// Whether one article passes the category and city criteria
pub fn matches(article: &Article, filters: &FilterSelection) -> bool {
    if let Some(category) = filters.category {
        if article.category_id != category {
            return false;
        }
    }

    match filters.city.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => article.mentions(city),
        _ => true,
    }
}

/// Stable sort; undated articles go last for both date orders
pub fn sort(articles: &mut [&Article], order: SortOrder) {
    match order {
        SortOrder::DateDesc => {
            articles.sort_by(|a, b| match (a.date, b.date) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        SortOrder::DateAsc => {
            articles.sort_by(|a, b| match (a.date, b.date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        SortOrder::Title => {
            articles.sort_by_cached_key(|a| a.title.to_lowercase());
        }
    }
}
