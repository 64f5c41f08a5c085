//! Backend API source
//!
//! Implementation of `NewsSource` for the newsdesk REST backend:
//! paginated `/api/news/`, `/api/news/{id}`, and `/api/categories/`.

use crate::config::api::{CATEGORIES_PATH, MAX_PAGES, NEWS_PATH, PAGE_SIZE};
use crate::error::{AppError, Result};
use crate::network::HttpClient;
use newsdesk::model::{Article, ArticleId, Category};
use reqwest::StatusCode;

use super::traits::NewsSource;
use super::types::Listing;

/// News source backed by the REST API
pub struct ApiNewsSource {
    client: HttpClient,
    base_url: String,
}

impl ApiNewsSource {
    /// Create a source for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        Ok(Self {
            client: HttpClient::new()?,
            base_url,
        })
    }

    /// Authenticate requests with a bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.client = self.client.with_token(token);
        self
    }

    /// Backend base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn article_url(&self, id: ArticleId) -> String {
        format!("{}{}", self.url(NEWS_PATH), id)
    }

    fn first_page_url(&self) -> String {
        format!("{}?page_size={}", self.url(NEWS_PATH), PAGE_SIZE)
    }
}

impl NewsSource for ApiNewsSource {
    fn name(&self) -> &'static str {
        "Backend API"
    }

    fn fetch_articles(&self) -> Result<Vec<Article>> {
        let mut articles = Vec::new();
        let mut next = Some(self.first_page_url());
        let mut pages = 0;

        while let Some(url) = next.take() {
            if pages == MAX_PAGES {
                tracing::warn!(pages, "page limit reached, article list truncated");
                break;
            }

            tracing::debug!(%url, "fetching article page");
            let listing: Listing<Article> = self.client.get_json(&url)?;
            let (items, next_url) = listing.into_parts();
            articles.extend(items);
            next = next_url;
            pages += 1;
        }

        tracing::info!(count = articles.len(), pages, "fetched articles");
        Ok(articles)
    }

    fn fetch_article(&self, id: ArticleId) -> Result<Option<Article>> {
        match self.client.get_json::<Article>(&self.article_url(id)) {
            Ok(article) => Ok(Some(article)),
            Err(AppError::Network(e)) if e.status() == Some(StatusCode::NOT_FOUND) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn fetch_categories(&self) -> Result<Vec<Category>> {
        let listing: Listing<Category> = self.client.get_json(&self.url(CATEGORIES_PATH))?;
        let (categories, _) = listing.into_parts();
        tracing::info!(count = categories.len(), "fetched categories");
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let source = ApiNewsSource::new("http://localhost:8000/").unwrap();
        assert_eq!(source.base_url(), "http://localhost:8000");
        assert_eq!(
            source.first_page_url(),
            "http://localhost:8000/api/news/?page_size=20"
        );
        assert_eq!(source.article_url(12), "http://localhost:8000/api/news/12");
        assert_eq!(
            source.url(CATEGORIES_PATH),
            "http://localhost:8000/api/categories/"
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = ApiNewsSource::new("localhost:8000");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_with_token() {
        let source = ApiNewsSource::new("https://news.example.org")
            .unwrap()
            .with_token("secret");
        assert_eq!(source.name(), "Backend API");
        assert_eq!(source.base_url(), "https://news.example.org");
    }

    #[test]
    fn test_parse_article_page() {
        let json = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"id": 1, "title": "a", "description": "", "date": "2025-04-05",
                 "category_id": 5, "is_confirmed": true, "author_id": 1},
                {"id": 2, "title": "b", "description": "", "category_id": 6, "author_id": 2}
            ]
        }"#;

        let listing: Listing<Article> = serde_json::from_str(json).unwrap();
        let (articles, next) = listing.into_parts();
        assert_eq!(articles.len(), 2);
        assert!(articles[0].is_confirmed);
        assert!(next.is_none());
    }
}
