//! Configuration constants for the newsdesk core

/// Persisted state keys (one value per key in the storage port)
pub mod keys {
    /// JSON array of favorited article ids
    pub const FAVORITES: &str = "favoritesNews";

    /// JSON object `{category, city, sort}`
    pub const FILTERS: &str = "newsCategories";

    /// JSON array of category descriptors
    pub const CATEGORY_LIST: &str = "categoriesList";
}

/// Article query configuration
pub mod news {
    /// Number of articles returned by a random sample when no count is given
    pub const DEFAULT_SAMPLE_SIZE: usize = 3;
}

/// Routing configuration
pub mod routes {
    /// Declared routes as `(pattern, view name)`, matched in order
    pub const TABLE: &[(&str, &str)] = &[
        ("/signin", "signin"),
        ("/", "main"),
        ("/signup", "signup"),
        ("/news/:id", "news"),
        ("/requests", "requests"),
        ("/requests/:id", "request-preview"),
    ];
}
