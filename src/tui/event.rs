use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit, // Ctrl+C
    Submit,
    Back,
    NextChapter,
    PreviousChapter,

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    ScrollUp, // Mouse wheel
    ScrollDown,
    Resize,
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => event::read().ok().and_then(|e| map_event(&e)),
        Ok(false) => None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Translates a raw crossterm event into a reader event.
pub fn map_event(event: &Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Windows reports both press and release
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) => Some(TuiEvent::Back),
                (_, KeyCode::Char('b' | 'h')) => Some(TuiEvent::Back),
                (_, KeyCode::Char('n') | KeyCode::Right) => Some(TuiEvent::NextChapter),
                (_, KeyCode::Char('p')) => Some(TuiEvent::PreviousChapter),
                (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                (_, KeyCode::PageDown | KeyCode::Char(' ')) => Some(TuiEvent::PageDown),
                (_, KeyCode::Home | KeyCode::Char('g')) => Some(TuiEvent::Top),
                (_, KeyCode::End | KeyCode::Char('G')) => Some(TuiEvent::Bottom),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
