//! # TitleBar Component
//!
//! Top status bar showing where the reader is and what it is doing.
//!
//! ## Responsibilities
//!
//! - Display the current navigation path (`/`, `/surah/2`)
//! - Display status messages (e.g., "Loading surah 2...", "114 surahs")
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has no
//! internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.route.to_string(), app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Sirat | /surah/2 | Loading surah 2..."`
//! 2. **Default**: `"Sirat | /surah"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component showing the path and status.
pub struct TitleBar {
    /// Current navigation path (e.g., "/surah/2")
    pub path: String,
    /// Status message (e.g., "Loading surah 2...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(path: String, status_message: String) -> Self {
        Self {
            path,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Sirat | {}", self.path)
        } else {
            format!("Sirat | {} | {}", self.path, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
