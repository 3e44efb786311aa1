//! # Application State
//!
//! Core reader state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn ChapterSource>  // where chapters come from
//! ├── route: Route                    // current navigation path
//! ├── history: Vec<Route>             // back stack
//! ├── cache: QueryCache               // responses keyed by request
//! └── status_message: String          // title bar text
//! ```
//!
//! Views never own fetched data. They derive what to show from
//! `route.query_key()` looked up in the cache, so a response that lands
//! after the user navigated away is stored but never rendered.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::api::{ChapterDetail, ChapterSource, ChapterSummary};
use crate::core::config::ResolvedConfig;
use crate::core::query::{Payload, QueryCache, QueryStatus};
use crate::core::route::Route;

pub struct App {
    pub source: Arc<dyn ChapterSource>,
    pub route: Route,
    pub history: Vec<Route>,
    pub cache: QueryCache,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn ChapterSource>, stale_after: Duration) -> Self {
        Self {
            source,
            route: Route::Home,
            history: Vec::new(),
            cache: QueryCache::new(stale_after),
            status_message: String::from("Welcome to Sirat"),
        }
    }

    pub fn from_config(source: Arc<dyn ChapterSource>, config: &ResolvedConfig) -> Self {
        Self::new(source, config.stale_after)
    }

    /// Render state of the current route.
    pub fn view_status(&self) -> QueryStatus<'_> {
        self.cache.status(self.route.query_key().as_ref())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view_status(), QueryStatus::Loading)
    }

    /// The chapter list, if the list view is showing and loaded.
    pub fn visible_chapters(&self) -> Option<&[ChapterSummary]> {
        match self.view_status() {
            QueryStatus::Success(Payload::Chapters(list)) => Some(list),
            _ => None,
        }
    }

    /// The chapter, if the detail view is showing and loaded.
    pub fn visible_chapter(&self) -> Option<&ChapterDetail> {
        match self.view_status() {
            QueryStatus::Success(Payload::Chapter(detail)) => Some(detail),
            _ => None,
        }
    }
}
