//! News data types
//!
//! Shapes consumed from the upstream API and persisted by the stores.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Article identifier as issued by the backend
pub type ArticleId = u64;

/// Category identifier as issued by the backend
pub type CategoryId = u64;

// =============================================================================
// Article
// =============================================================================

/// Author summary embedded in an article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    pub login: String,
}

/// A selectable news category
///
/// Used both for the persisted category list and for the summary
/// embedded in an article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
}

impl Category {
    pub fn new(id: CategoryId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// A single news item
///
/// `is_liked` is derived locally from the favorites set and is never
/// trusted from the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Publication date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub category_id: CategoryId,
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub is_liked: bool,
    pub author_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Article {
    /// Create an article with minimal info
    pub fn new(
        id: ArticleId,
        title: impl Into<String>,
        category_id: CategoryId,
        author_id: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            date: None,
            category_id,
            is_confirmed: false,
            is_liked: false,
            author_id,
            author: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_author(mut self, login: impl Into<String>) -> Self {
        self.author = Some(Author {
            id: self.author_id,
            login: login.into(),
        });
        self
    }

    pub fn with_category(mut self, title: impl Into<String>) -> Self {
        self.category = Some(Category::new(self.category_id, title));
        self
    }

    pub fn confirmed(mut self) -> Self {
        self.is_confirmed = true;
        self
    }

    /// Case-insensitive substring match over title and description
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

// =============================================================================
// Filter selection
// =============================================================================

/// The user's chosen browsing criteria
///
/// Every field is nullable and missing fields deserialize as null, so
/// partial or older persisted objects still load. Fields are read one at a
/// time: a value of the wrong type becomes null without touching the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterSelection {
    #[serde(deserialize_with = "lenient_id")]
    pub category: Option<CategoryId>,
    #[serde(deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub sort: Option<String>,
}

/// Id from a JSON number or a numeric string (select inputs yield strings)
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<CategoryId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Text from a JSON string or number; anything else is null
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, id: CategoryId) -> Self {
        self.category = Some(id);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.city.is_none() && self.sort.is_none()
    }

    /// Parsed sort order, `None` when unset or unrecognized
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort.as_deref().and_then(SortOrder::parse)
    }
}

/// Sort criteria for articles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent first
    DateDesc,
    /// Oldest first
    DateAsc,
    /// Alphabetical by title
    Title,
}

impl SortOrder {
    /// Parse a persisted sort string; accepts a few spellings
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date_desc" | "-date" | "newest" | "new" => Some(SortOrder::DateDesc),
            "date_asc" | "date" | "oldest" | "old" => Some(SortOrder::DateAsc),
            "title" | "name" | "alpha" => Some(SortOrder::Title),
            _ => None,
        }
    }

    /// Canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date_desc",
            SortOrder::DateAsc => "date_asc",
            SortOrder::Title => "title",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_from_api_json() {
        let json = r#"{
            "id": 1,
            "title": "news2",
            "description": "desc",
            "date": "2025-04-05",
            "category_id": 5,
            "is_confirmed": true,
            "is_liked": false,
            "author_id": 1,
            "author": {"id": 1, "login": "user1"},
            "category": {"id": 5, "title": "Science"}
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, 1);
        assert_eq!(article.date, NaiveDate::from_ymd_opt(2025, 4, 5));
        assert_eq!(article.author.unwrap().login, "user1");
        assert_eq!(article.category.unwrap().title, "Science");
    }

    #[test]
    fn test_article_minimal_json() {
        // Backend list endpoint omits nested objects and may omit the date
        let json = r#"{"id": 9, "title": "t", "category_id": 2, "author_id": 3, "extra": 1}"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, 9);
        assert!(article.date.is_none());
        assert!(article.author.is_none());
        assert!(!article.is_liked);
    }

    #[test]
    fn test_filter_selection_defaults_to_null() {
        let filters: FilterSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(filters, FilterSelection::default());
        assert!(filters.is_empty());

        let json = serde_json::to_string(&filters).unwrap();
        assert_eq!(json, r#"{"category":null,"city":null,"sort":null}"#);
    }

    #[test]
    fn test_filter_selection_partial() {
        let filters: FilterSelection = serde_json::from_str(r#"{"city": "Tomsk"}"#).unwrap();
        assert_eq!(filters.city.as_deref(), Some("Tomsk"));
        assert!(filters.category.is_none());
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_filter_selection_lenient_fields() {
        let json = r#"{"category": "5", "city": "Tomsk", "sort": "date_desc"}"#;
        let filters: FilterSelection = serde_json::from_str(json).unwrap();
        assert_eq!(filters, FilterSelection::new().category(5).city("Tomsk").sort("date_desc"));

        // A bad field is dropped on its own
        let json = r#"{"category": {"id": 5}, "city": ["x"], "sort": 7}"#;
        let filters: FilterSelection = serde_json::from_str(json).unwrap();
        assert!(filters.category.is_none());
        assert!(filters.city.is_none());
        assert_eq!(filters.sort.as_deref(), Some("7"));

        let json = r#"{"category": "abc", "city": null, "sort": true}"#;
        let filters: FilterSelection = serde_json::from_str(json).unwrap();
        assert_eq!(filters, FilterSelection::default());

        let json = r#"{"category": -3}"#;
        let filters: FilterSelection = serde_json::from_str(json).unwrap();
        assert!(filters.category.is_none());
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("date_desc"), Some(SortOrder::DateDesc));
        assert_eq!(SortOrder::parse("Newest"), Some(SortOrder::DateDesc));
        assert_eq!(SortOrder::parse("oldest"), Some(SortOrder::DateAsc));
        assert_eq!(SortOrder::parse(" title "), Some(SortOrder::Title));
        assert_eq!(SortOrder::parse("popularity"), None);

        let filters = FilterSelection::new().sort("date_asc");
        assert_eq!(filters.sort_order(), Some(SortOrder::DateAsc));
        assert_eq!(SortOrder::DateAsc.as_str(), "date_asc");
    }

    #[test]
    fn test_mentions_is_case_insensitive() {
        let article = Article::new(1, "Grant results in TOMSK", 1, 1)
            .with_description("Universities of Siberia");
        assert!(article.mentions("tomsk"));
        assert!(article.mentions("siberia"));
        assert!(!article.mentions("kazan"));
    }
}
