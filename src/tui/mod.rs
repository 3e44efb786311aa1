//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! view, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetching
//!
//! `update()` never performs I/O. When it returns `Effect::Fetch(key)` the
//! loop spawns a tokio task that calls the `ChapterSource` and sends the
//! outcome back as `Action::FetchCompleted` over an mpsc channel, drained
//! once per iteration.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, fetch results or
//!   terminal resize.

mod component;
mod components;
mod event;
pub mod rtl;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{AlQuranClient, ChapterSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::query::{self, QueryKey};
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ChapterDetailState, ChapterListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core reader logic).
pub struct TuiState {
    pub chapter_list: ChapterListState,
    pub chapter_detail: ChapterDetailState,
    /// Reverse RTL lines before drawing, for terminals without bidi support.
    pub reorder_rtl: bool,
}

impl TuiState {
    pub fn new(reorder_rtl: bool) -> Self {
        Self {
            chapter_list: ChapterListState::new(),
            chapter_detail: ChapterDetailState::new(),
            reorder_rtl,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Build the chapter source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn ChapterSource> {
    Arc::new(AlQuranClient::new(
        Some(config.base_url.clone()),
        config.timeout,
    ))
}

/// Maps a terminal event to an action for the current route, updating
/// per-view presentation state (selection, scroll) along the way.
fn handle_view_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match app.route {
        Route::Home => match tui.chapter_list.handle_event(event)? {
            ListEvent::Open(index) => {
                let chapter = app.visible_chapters()?.get(index)?;
                Some(Action::Navigate(Route::chapter(chapter.number)))
            }
        },
        Route::Chapter(_) => match event {
            TuiEvent::Back => Some(Action::Back),
            TuiEvent::NextChapter => Some(Action::NextChapter),
            TuiEvent::PreviousChapter => Some(Action::PreviousChapter),
            _ => {
                tui.chapter_detail.handle_event(event);
                None
            }
        },
    }
}

pub fn run(config: ResolvedConfig, start: Route) -> std::io::Result<()> {
    let source = build_source(&config);
    info!("Reading from {} ({})", config.base_url, source.name());
    let mut app = App::from_config(source, &config);
    app.route = start;
    let mut tui = TuiState::new(config.reorder_rtl);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    if let Effect::Fetch(key) = update(&mut app, Action::Mount) {
        spawn_fetch(app.source.clone(), key, tx.clone());
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = handle_view_event(&app, &mut tui, &event) else {
                continue;
            };
            if dispatch(&mut app, &mut tui, action, &tx) == Effect::Quit {
                break 'event_loop;
            }
        }

        // Fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(&mut app, &mut tui, action, &tx) == Effect::Quit {
                break 'event_loop;
            }
        }
    }

    info!("Exiting");
    ratatui::restore();
    Ok(())
}

/// Runs `update()` and performs the effect it asks for. Detail scroll is
/// reset whenever the route changes.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> Effect {
    debug!("Dispatching {:?}", action);
    let before = app.route.clone();
    let effect = update(app, action);
    if app.route != before {
        tui.chapter_detail.reset();
    }
    if let Effect::Fetch(key) = &effect {
        spawn_fetch(app.source.clone(), key.clone(), tx.clone());
    }
    effect
}

fn spawn_fetch(source: Arc<dyn ChapterSource>, key: QueryKey, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch for {:?}", key);
    tokio::spawn(async move {
        let started = Instant::now();
        let result = query::fetch(source.as_ref(), &key).await;
        debug!(
            "Fetch {:?} finished in {}ms (ok={})",
            key,
            started.elapsed().as_millis(),
            result.is_ok()
        );
        if tx.send(Action::FetchCompleted { key, result }).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Payload;
    use crate::test_support::{summary, test_app};

    fn loaded_home() -> App {
        let mut app = test_app();
        update(&mut app, Action::Mount);
        update(
            &mut app,
            Action::FetchCompleted {
                key: QueryKey::Chapters,
                result: Ok(Payload::Chapters(vec![
                    summary(1, "Al-Faatiha", 7),
                    summary(2, "Al-Baqara", 286),
                ])),
            },
        );
        app
    }

    #[test]
    fn test_quit_keys_quit_on_every_route() {
        let app = test_app();
        let mut tui = TuiState::new(false);
        assert!(matches!(
            handle_view_event(&app, &mut tui, &TuiEvent::Quit),
            Some(Action::Quit)
        ));
        assert!(matches!(
            handle_view_event(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_submit_on_home_navigates_to_selected_chapter() {
        let app = loaded_home();
        let mut tui = TuiState::new(false);
        tui.chapter_list.list_state.select(Some(1));
        tui.chapter_list.len = 2;

        let action = handle_view_event(&app, &mut tui, &TuiEvent::Submit);
        match action {
            Some(Action::Navigate(route)) => assert_eq!(route, Route::chapter(2)),
            other => panic!("expected Navigate, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_before_list_loads_does_nothing() {
        let mut app = test_app();
        update(&mut app, Action::Mount);
        let mut tui = TuiState::new(false);
        assert!(handle_view_event(&app, &mut tui, &TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_detail_keys_map_to_navigation_actions() {
        let mut app = loaded_home();
        update(&mut app, Action::Navigate(Route::chapter(1)));
        let mut tui = TuiState::new(false);

        assert!(matches!(
            handle_view_event(&app, &mut tui, &TuiEvent::Back),
            Some(Action::Back)
        ));
        assert!(matches!(
            handle_view_event(&app, &mut tui, &TuiEvent::NextChapter),
            Some(Action::NextChapter)
        ));
        assert!(matches!(
            handle_view_event(&app, &mut tui, &TuiEvent::PreviousChapter),
            Some(Action::PreviousChapter)
        ));
        assert!(handle_view_event(&app, &mut tui, &TuiEvent::ScrollDown).is_none());
    }

    #[tokio::test]
    async fn test_dispatch_resets_scroll_and_spawns_fetch() {
        let mut app = loaded_home();
        let mut tui = TuiState::new(false);
        tui.chapter_detail.content_height = 100;
        tui.chapter_detail.viewport_height = 10;
        tui.chapter_detail.handle_event(&TuiEvent::Bottom);
        assert_eq!(tui.chapter_detail.offset(), 90);
        let (tx, rx) = mpsc::channel();

        let effect = dispatch(
            &mut app,
            &mut tui,
            Action::Navigate(Route::chapter(1)),
            &tx,
        );
        assert_eq!(effect, Effect::Fetch(QueryKey::Chapter("1".into())));
        assert_eq!(tui.chapter_detail.offset(), 0);

        // StubSource has no details, so the spawned fetch reports a failure.
        let action = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
            .await
            .unwrap()
            .unwrap();
        match action {
            Action::FetchCompleted { key, result } => {
                assert_eq!(key, QueryKey::Chapter("1".into()));
                assert!(result.is_err());
            }
            other => panic!("expected FetchCompleted, got {:?}", other),
        }
    }
}
