//! # Path resolution: URL path to screen
//!
//! [`resolve`] maps a raw browser path to the [`Route`] the application should
//! render. It is total and pure: every string resolves to something, and the
//! same input always produces the same route.
//!
//! ## Normalisation
//!
//! 1. The query string (from the first `?`) is dropped.
//! 2. Exactly one trailing `/` is removed, unless the path is `/` itself.
//!
//! ## Matching order
//!
//! First match wins. Exact routes are checked before the slug fallback, so
//! `/dashboard` opens the dashboard while `/dashboards` is a public card.
//!
//! | Path | Route |
//! |------|-------|
//! | `/`, empty, `/index.html` | [`Route::Home`] |
//! | `/dashboard` | [`Route::Dashboard`] |
//! | `/checkout/success`, `/checkout/failure`, `/checkout/pending` | [`Route::CheckoutStatus`] |
//! | any other path longer than one character without a `.` | [`Route::PublicCard`] |
//! | anything else (e.g. `/logo.png`) | [`Route::Home`] |
//!
//! [`Router`] carries the current path and an in-memory history as an explicit
//! state object; the UI layer owns the browser-side effects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome reported by the payment provider when it redirects back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutKind {
    Success,
    Failure,
    Pending,
}

impl CheckoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckoutKind::Success => "success",
            CheckoutKind::Failure => "failure",
            CheckoutKind::Pending => "pending",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "success" => Some(CheckoutKind::Success),
            "failure" => Some(CheckoutKind::Failure),
            "pending" => Some(CheckoutKind::Pending),
            _ => None,
        }
    }
}

/// The screen selected for a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Route {
    Home,
    Dashboard,
    CheckoutStatus { kind: CheckoutKind },
    PublicCard { slug: String },
}

impl Route {
    /// Canonical path for this route. `resolve(&route.path()) == route` for
    /// every route whose slug is itself a valid public-card path.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::CheckoutStatus { kind } => format!("/checkout/{}", kind.as_str()),
            Route::PublicCard { slug } => format!("/{slug}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Drop the query string and a single trailing slash.
pub fn normalize(path: &str) -> &str {
    let path = match path.find('?') {
        Some(idx) => &path[..idx],
        None => path,
    };
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Resolve a raw path (query string and trailing slash allowed) to a [`Route`].
pub fn resolve(path: &str) -> Route {
    let path = normalize(path);

    if path.is_empty() || path == "/" || path == "/index.html" {
        return Route::Home;
    }

    if path == "/dashboard" {
        return Route::Dashboard;
    }

    if let Some(kind) = path
        .strip_prefix("/checkout/")
        .and_then(CheckoutKind::from_segment)
    {
        return Route::CheckoutStatus { kind };
    }

    // Anything with a dot looks like a static asset, never a slug.
    if path.len() > 1 && !path.contains('.') {
        let slug = path.strip_prefix('/').unwrap_or(path);
        return Route::PublicCard {
            slug: slug.to_string(),
        };
    }

    Route::Home
}

/// Navigation state: the current path plus the paths visited before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Router {
    path: String,
    history: Vec<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            path: initial.into(),
            history: Vec::new(),
        }
    }

    /// The raw path last navigated to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The route for the current path.
    pub fn current(&self) -> Route {
        resolve(&self.path)
    }

    /// Push a new path and return the route it resolves to.
    pub fn navigate(&mut self, path: impl Into<String>) -> Route {
        let previous = std::mem::replace(&mut self.path, path.into());
        self.history.push(previous);
        self.current()
    }

    /// Return to the previous path. `None` when there is nothing to go back to.
    pub fn back(&mut self) -> Option<Route> {
        let previous = self.history.pop()?;
        self.path = previous;
        Some(self.current())
    }

    /// Replace the current path without recording history (browser popstate).
    pub fn replace(&mut self, path: impl Into<String>) -> Route {
        self.path = path.into();
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
