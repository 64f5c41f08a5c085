//! Shared source types
//!
//! Response envelopes used by the backend API.

use serde::Deserialize;

/// One page of a paginated list response
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    #[serde(default)]
    pub count: Option<usize>,
    /// URL of the next page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A list endpoint response, paginated or a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// Split into this page's items and the next page URL
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        match self {
            Listing::Paged(page) => (page.results, page.next),
            Listing::Plain(items) => (items, None),
        }
    }
}
