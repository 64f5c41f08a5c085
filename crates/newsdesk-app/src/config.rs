//! Configuration constants for newsdesk app services

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "newsdesk";

    /// Environment variable holding the log filter
    pub const LOG_ENV: &str = "NEWSDESK_LOG";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Newsdesk/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Backend API configuration
pub mod api {
    /// Default backend base URL
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

    /// Environment variable overriding the base URL
    pub const BASE_URL_ENV: &str = "NEWSDESK_API_URL";

    /// Environment variable holding the bearer token
    pub const TOKEN_ENV: &str = "NEWSDESK_TOKEN";

    /// Article list endpoint (paginated)
    pub const NEWS_PATH: &str = "/api/news/";

    /// Category list endpoint
    pub const CATEGORIES_PATH: &str = "/api/categories/";

    /// Page size requested from the article list endpoint
    pub const PAGE_SIZE: usize = 20;

    /// Upper bound on pages followed in one fetch
    pub const MAX_PAGES: usize = 50;
}
