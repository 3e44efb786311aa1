//! # Actions
//!
//! Everything that can happen in Sirat becomes an `Action`.
//! User picks a chapter? That's `Action::Navigate(route)`.
//! A fetch finishes? That's `Action::FetchCompleted { key, result }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing I/O the caller
//! must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Instant;

use log::{debug, info, warn};

use crate::api::ApiError;
use crate::core::query::{Payload, QueryKey, QueryStatus};
use crate::core::route::Route;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Mount the current route (startup).
    Mount,
    /// Go to a route, remembering the current one for `Back`.
    Navigate(Route),
    /// Return to the previous route, or the chapter list.
    Back,
    NextChapter,
    PreviousChapter,
    FetchCompleted {
        key: QueryKey,
        result: Result<Payload, ApiError>,
    },
    Quit,
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(QueryKey),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => mount(app),
        Action::Navigate(route) => {
            debug!("Navigate {} -> {}", app.route, route);
            let previous = std::mem::replace(&mut app.route, route);
            app.history.push(previous);
            mount(app)
        }
        Action::Back => {
            app.route = app.history.pop().unwrap_or_default();
            debug!("Back to {}", app.route);
            mount(app)
        }
        Action::NextChapter => step_chapter(app, 1),
        Action::PreviousChapter => step_chapter(app, -1),
        Action::FetchCompleted { key, result } => {
            match &result {
                Ok(_) => info!("Query {:?} succeeded", key),
                Err(e) => warn!("Query {:?} failed: {}", key, e),
            }
            let is_current = app.route.query_key().as_ref() == Some(&key);
            app.cache.complete(key.clone(), result, Instant::now());
            if is_current {
                refresh_status(app);
            } else {
                debug!("Query {:?} finished off-screen, cached only", key);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Runs the mount side of the current route: consult the cache and ask for
/// a fetch if one is needed. A chapter route without an ordinal fetches
/// nothing.
fn mount(app: &mut App) -> Effect {
    let effect = match app.route.query_key() {
        Some(key) if app.cache.begin(&key, Instant::now()) => Effect::Fetch(key),
        Some(_) => Effect::None,
        None => {
            debug!("Route {} has no ordinal, not fetching", app.route);
            Effect::None
        }
    };
    refresh_status(app);
    effect
}

/// Moves to the neighbouring chapter without growing the back stack.
/// Stops at 1 and, when the index is cached, at the last known chapter.
fn step_chapter(app: &mut App, delta: i64) -> Effect {
    let Some(current) = app.route.chapter_number() else {
        return Effect::None;
    };
    let target = i64::from(current) + delta;
    if target < 1 {
        return Effect::None;
    }
    if let Some(last) = app.cache.chapters().and_then(|c| c.iter().map(|s| s.number).max())
        && target > i64::from(last)
    {
        return Effect::None;
    }
    let Ok(target) = u32::try_from(target) else {
        return Effect::None;
    };
    app.route = Route::chapter(target);
    mount(app)
}

fn refresh_status(app: &mut App) {
    let label = app
        .route
        .query_key()
        .map(|k| k.label())
        .unwrap_or_default();

    app.status_message = match app.view_status() {
        QueryStatus::Idle => String::new(),
        QueryStatus::Loading => format!("Loading {label}..."),
        QueryStatus::Error(_) => format!("Failed to load {label}"),
        QueryStatus::Success(Payload::Chapters(list)) => match list.len() {
            1 => "1 surah".to_string(),
            n => format!("{n} surahs"),
        },
        QueryStatus::Success(Payload::Chapter(detail)) => {
            format!("Surah {} · {}", detail.number, detail.english_name)
        }
    };
}
