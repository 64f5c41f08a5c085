//! Routed views
//!
//! Typed form of a route match, with dynamic segments parsed.

use newsdesk::model::ArticleId;
use newsdesk::router::RouteMatch;
use std::fmt;

/// A view selected by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    SignIn,
    Main,
    SignUp,
    News { id: ArticleId },
    Requests,
    RequestPreview { id: ArticleId },
}

impl View {
    /// Convert a route match; `None` for unknown names or unparsable ids
    pub fn from_match(m: &RouteMatch<'_>) -> Option<Self> {
        let id = || m.param("id").and_then(|v| v.parse::<ArticleId>().ok());

        match m.name {
            "signin" => Some(View::SignIn),
            "main" => Some(View::Main),
            "signup" => Some(View::SignUp),
            "news" => id().map(|id| View::News { id }),
            "requests" => Some(View::Requests),
            "request-preview" => id().map(|id| View::RequestPreview { id }),
            _ => None,
        }
    }

    /// Route name of this view
    pub fn name(&self) -> &'static str {
        match self {
            View::SignIn => "signin",
            View::Main => "main",
            View::SignUp => "signup",
            View::News { .. } => "news",
            View::Requests => "requests",
            View::RequestPreview { .. } => "request-preview",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::News { id } | View::RequestPreview { id } => {
                write!(f, "{} (id={})", self.name(), id)
            }
            _ => f.write_str(self.name()),
        }
    }
}
