//! # Footer Component
//!
//! Bottom line with key hints for the current view and the data attribution.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::route::Route;
use crate::tui::component::Component;

const ATTRIBUTION: &str = "Data from AlQuran.cloud";

pub struct Footer<'a> {
    pub route: &'a Route,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }

    fn hints(&self) -> &'static str {
        match self.route {
            Route::Home => " ↑↓ Select  Enter Read  q Quit ",
            Route::Chapter(_) => " Esc Back  ↑↓ Scroll  n/p Next/Prev  q Quit ",
        }
    }
}

impl<'a> Component for Footer<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let line = Line::from(vec![
            Span::styled(self.hints(), dim),
            Span::styled("• ", dim),
            Span::styled(ATTRIBUTION, dim),
        ]);
        frame.render_widget(line, area);
    }
}
