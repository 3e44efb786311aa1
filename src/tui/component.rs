use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Views are built per frame from props (the `QueryStatus` of the current
/// route, display flags) plus a `&mut` borrow of their persistent state in
/// `TuiState`.
///
/// `render` takes `&mut self` so a view can record what it laid out
/// (card count, viewport and canvas height) for the next round of event
/// handling to clamp against.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent view state that reacts to input.
pub trait EventHandler {
    /// What the view reports back to the event loop, if anything.
    type Event;

    /// Returns `Some` only when the loop has to act (e.g. open a chapter).
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
