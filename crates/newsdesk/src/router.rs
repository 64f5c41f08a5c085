//! Route table
//!
//! Static, ordered mapping from URL path patterns to view names. Patterns
//! are `/`-separated segments where `:name` captures one path segment and
//! hands it to the matched view.

use crate::config::routes::TABLE;
use crate::error::{NewsError, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

impl Segment {
    /// Two segments can both match some concrete path segment
    fn overlaps(&self, other: &Segment) -> bool {
        match (self, other) {
            (Segment::Static(a), Segment::Static(b)) => a == b,
            _ => true,
        }
    }
}

/// One declared route
#[derive(Debug, Clone)]
pub struct Route {
    pattern: String,
    name: String,
    segments: Vec<Segment>,
}

impl Route {
    /// Parse a pattern such as `/news/:id`
    pub fn new(pattern: &str, name: &str) -> Result<Self> {
        if !pattern.starts_with('/') {
            return Err(NewsError::Route(format!(
                "pattern '{}' must start with '/'",
                pattern
            )));
        }
        if name.is_empty() {
            return Err(NewsError::Route(format!("route '{}' has no name", pattern)));
        }

        let mut segments = Vec::new();
        for part in split_path(pattern) {
            match part.strip_prefix(':') {
                Some("") => {
                    return Err(NewsError::Route(format!(
                        "pattern '{}' has an unnamed parameter",
                        pattern
                    )));
                }
                Some(param) => segments.push(Segment::Param(param.to_string())),
                None => segments.push(Segment::Static(part.to_string())),
            }
        }

        Ok(Self {
            pattern: pattern.to_string(),
            name: name.to_string(),
            segments,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the dynamic segments in declaration order
    pub fn params(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(p) => Some(p.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }

    fn overlaps(&self, other: &Route) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.overlaps(b))
    }

    fn capture(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(s) if s == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

/// Result of matching a path against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// View name of the matched route
    pub name: &'a str,
    /// Pattern of the matched route
    pub pattern: &'a str,
    /// Captured dynamic segments
    pub params: BTreeMap<String, String>,
}

impl RouteMatch<'_> {
    /// Value of a captured segment
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered route table, first match wins
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build a router from `(pattern, name)` pairs
    ///
    /// Rejects malformed patterns, duplicate names, and patterns that could
    /// both match the same path.
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self> {
        let mut routes: Vec<Route> = Vec::with_capacity(table.len());

        for (pattern, name) in table {
            let route = Route::new(pattern, name)?;

            if let Some(existing) = routes.iter().find(|r| r.name == route.name) {
                return Err(NewsError::Route(format!(
                    "duplicate route name '{}' ({} and {})",
                    route.name, existing.pattern, route.pattern
                )));
            }
            if let Some(existing) = routes.iter().find(|r| r.overlaps(&route)) {
                return Err(NewsError::Route(format!(
                    "pattern '{}' overlaps '{}'",
                    route.pattern, existing.pattern
                )));
            }

            routes.push(route);
        }

        Ok(Self { routes })
    }

    /// The application's route table
    pub fn standard() -> Result<Self> {
        Self::from_table(TABLE)
    }

    /// Match a path; query string, fragment, and trailing slashes are ignored
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let parts: Vec<&str> = split_path(path).collect();

        self.routes.iter().find_map(|route| {
            route.capture(&parts).map(|params| RouteMatch {
                name: &route.name,
                pattern: &route.pattern,
                params,
            })
        })
    }

    /// Build the path for a named route from parameter values
    ///
    /// Returns `None` for an unknown name or a missing/empty parameter.
    pub fn resolve(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let route = self.get(name)?;
        if route.segments.is_empty() {
            return Some("/".to_string());
        }

        let mut path = String::new();
        for segment in &route.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(p) => {
                    let value = params
                        .iter()
                        .find(|(k, _)| k == p)
                        .map(|(_, v)| *v)
                        .filter(|v| !v.is_empty() && !v.contains('/'))?;
                    path.push_str(value);
                }
            }
        }
        Some(path)
    }

    /// Get a route by view name
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// All routes in match order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::standard().unwrap()
    }

    #[test]
    fn test_static_routes() {
        let router = router();
        for (path, name) in [
            ("/signin", "signin"),
            ("/", "main"),
            ("/signup", "signup"),
            ("/requests", "requests"),
        ] {
            let m = router.match_path(path).unwrap();
            assert_eq!(m.name, name, "path {path}");
            assert!(m.params.is_empty());
        }
    }

    #[test]
    fn test_dynamic_segments() {
        let router = router();

        let m = router.match_path("/news/42").unwrap();
        assert_eq!(m.name, "news");
        assert_eq!(m.param("id"), Some("42"));

        let m = router.match_path("/requests/abc").unwrap();
        assert_eq!(m.name, "request-preview");
        assert_eq!(m.pattern, "/requests/:id");
        assert_eq!(m.param("id"), Some("abc"));
    }

    #[test]
    fn test_trailing_slash_query_and_fragment() {
        let router = router();
        assert_eq!(router.match_path("/signin/").unwrap().name, "signin");
        assert_eq!(router.match_path("/news/7?ref=feed").unwrap().param("id"), Some("7"));
        assert_eq!(router.match_path("/requests#top").unwrap().name, "requests");
        assert_eq!(router.match_path("").unwrap().name, "main");
    }

    #[test]
    fn test_unknown_paths() {
        let router = router();
        assert!(router.match_path("/news").is_none());
        assert!(router.match_path("/news/1/comments").is_none());
        assert!(router.match_path("/profile").is_none());
    }

    #[test]
    fn test_first_match_order() {
        let router = Router::from_table(&[("/a/:x", "first"), ("/b/:x", "second")]).unwrap();
        assert_eq!(router.match_path("/b/1").unwrap().name, "second");
        assert_eq!(router.routes().len(), 2);
    }

    #[test]
    fn test_rejects_ambiguous_patterns() {
        let result = Router::from_table(&[("/news/:id", "news"), ("/news/latest", "latest")]);
        assert!(matches!(result, Err(NewsError::Route(_))));

        let result = Router::from_table(&[("/:a", "one"), ("/:b", "two")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = Router::from_table(&[("/a", "same"), ("/b", "same")]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("same"));
    }

    #[test]
    fn test_rejects_malformed_patterns() {
        assert!(Route::new("news", "news").is_err());
        assert!(Route::new("/news/:", "news").is_err());
        assert!(Route::new("/news", "").is_err());
    }

    #[test]
    fn test_route_params() {
        let router = router();
        assert_eq!(router.get("news").unwrap().params(), vec!["id"]);
        assert!(router.get("main").unwrap().params().is_empty());
        assert!(router.get("missing").is_none());
    }

    #[test]
    fn test_resolve() {
        let router = router();
        assert_eq!(router.resolve("main", &[]).as_deref(), Some("/"));
        assert_eq!(router.resolve("news", &[("id", "5")]).as_deref(), Some("/news/5"));
        assert_eq!(
            router.resolve("request-preview", &[("id", "9")]).as_deref(),
            Some("/requests/9")
        );
        assert!(router.resolve("news", &[]).is_none());
        assert!(router.resolve("news", &[("id", "a/b")]).is_none());
        assert!(router.resolve("nowhere", &[]).is_none());
    }

    #[test]
    fn test_resolve_then_match() {
        let router = router();
        let path = router.resolve("news", &[("id", "12")]).unwrap();
        let m = router.match_path(&path).unwrap();
        assert_eq!(m.name, "news");
        assert_eq!(m.param("id"), Some("12"));
    }
}
