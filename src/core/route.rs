//! # Routes
//!
//! The navigation surface of the reader, kept as URL-style paths:
//!
//! ```text
//! /                 → Route::Home             (chapter list)
//! /surah/:ordinal   → Route::Chapter(Some(o)) (chapter detail)
//! /surah            → Route::Chapter(None)    (detail with nothing to fetch)
//! ```
//!
//! The ordinal is an opaque string; it is forwarded verbatim to the fetch.

use std::fmt;

use log::warn;

use crate::core::query::QueryKey;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Chapter(Option<String>),
}

impl Route {
    pub fn chapter(number: u32) -> Self {
        Route::Chapter(Some(number.to_string()))
    }

    /// Parses a navigation path. Unknown paths fall back to `Home`.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Route::Home;
        }

        let mut segments = trimmed.trim_start_matches('/').splitn(2, '/');
        match (segments.next(), segments.next()) {
            (Some("surah"), None) => Route::Chapter(None),
            (Some("surah"), Some(ordinal)) if !ordinal.is_empty() => {
                Route::Chapter(Some(ordinal.to_string()))
            }
            (Some("surah"), Some(_)) => Route::Chapter(None),
            _ => {
                warn!("Unknown path '{}', showing the chapter list", path);
                Route::Home
            }
        }
    }

    /// The cache key this route fetches, if it fetches anything.
    pub fn query_key(&self) -> Option<QueryKey> {
        match self {
            Route::Home => Some(QueryKey::Chapters),
            Route::Chapter(Some(ordinal)) => Some(QueryKey::Chapter(ordinal.clone())),
            Route::Chapter(None) => None,
        }
    }

    /// Numeric ordinal of a chapter route, if it has one.
    pub fn chapter_number(&self) -> Option<u32> {
        match self {
            Route::Chapter(Some(ordinal)) => ordinal.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Chapter(Some(ordinal)) => write!(f, "/surah/{ordinal}"),
            Route::Chapter(None) => write!(f, "/surah"),
        }
    }
}
