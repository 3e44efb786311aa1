//! # Chapter Detail View
//!
//! One chapter: a back hint, a header card, the invocation (except for
//! chapters 1 and 9), then every verse as a [`VerseCard`] in ascending
//! in-chapter order.
//!
//! The whole body is laid out on a `ScrollView` canvas. Heights are computed
//! up front with the same wrapping the cards render with, so the canvas is
//! exactly as tall as its content and scrolling can be clamped to it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{ChapterDetail as Detail, INVOCATION, INVOCATION_TRANSLATION};
use crate::core::query::{Payload, QueryStatus};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::spinner::Spinner;
use crate::tui::components::verse_card::VerseCard;
use crate::tui::event::TuiEvent;
use crate::tui::rtl::reorder_clusters;

pub const DETAIL_ERROR: &str = "Failed to load surah. Please try again later.";
pub const BACK_HINT: &str = "← Back to Surahs (Esc)";

const HEADER_HEIGHT: u16 = 8;
const INVOCATION_HEIGHT: u16 = 3;
const SPACER_HEIGHT: u16 = 1;

/// Persistent scroll state for the detail view. Reset on every route change.
#[derive(Default)]
pub struct ChapterDetailState {
    pub scroll_state: ScrollViewState,
    pub viewport_height: u16,
    pub content_height: u16,
}

impl ChapterDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.scroll_state = ScrollViewState::default();
        self.content_height = 0;
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Keeps the offset inside the content so the last verse never scrolls
    /// past the bottom edge.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for ChapterDetailState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::Top => self.scroll_state.scroll_to_top(),
            TuiEvent::Bottom => {
                let max_y = self.max_offset();
                self.scroll_state.set_offset(Position { x: 0, y: max_y });
            }
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// Transient render wrapper for the detail view.
pub struct ChapterDetail<'a> {
    pub state: &'a mut ChapterDetailState,
    pub status: QueryStatus<'a>,
    pub spinner_frame: usize,
    pub reorder_rtl: bool,
}

impl<'a> ChapterDetail<'a> {
    pub fn new(
        state: &'a mut ChapterDetailState,
        status: QueryStatus<'a>,
        spinner_frame: usize,
        reorder_rtl: bool,
    ) -> Self {
        Self {
            state,
            status,
            spinner_frame,
            reorder_rtl,
        }
    }

    fn rtl(&self, text: &str) -> String {
        if self.reorder_rtl {
            reorder_clusters(text)
        } else {
            text.to_string()
        }
    }

    fn header(&self, detail: &Detail) -> Paragraph<'static> {
        let lines = vec![
            Line::styled(
                detail.number.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                self.rtl(&detail.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                detail.english_name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                detail.english_name_translation.clone(),
                Style::default().fg(Color::Gray),
            ),
            Line::default(),
            Line::styled(
                format!("{} · {}", detail.verse_count_label(), detail.revelation_type),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        Paragraph::new(lines).centered().block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
    }

    fn invocation(&self) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::styled(
                self.rtl(INVOCATION),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                INVOCATION_TRANSLATION,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
        .centered()
    }

    fn render_chapter(&mut self, frame: &mut Frame, area: Rect, detail: &Detail) {
        // One column is reserved for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        let invocation_height = if detail.shows_invocation() {
            INVOCATION_HEIGHT
        } else {
            0
        };

        let verse_heights: Vec<u16> = detail
            .verses
            .iter()
            .map(|v| VerseCard::calculate_height(v, content_width, self.reorder_rtl))
            .collect();
        let canvas_height = HEADER_HEIGHT
            + invocation_height
            + SPACER_HEIGHT
            + verse_heights.iter().copied().fold(0u16, u16::saturating_add);

        self.state.viewport_height = area.height;
        self.state.content_height = canvas_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        scroll_view.render_widget(
            self.header(detail),
            Rect::new(0, y, content_width, HEADER_HEIGHT),
        );
        y += HEADER_HEIGHT;

        if invocation_height > 0 {
            scroll_view.render_widget(
                self.invocation(),
                Rect::new(0, y, content_width, INVOCATION_HEIGHT - 1),
            );
            y += invocation_height;
        }
        y += SPACER_HEIGHT;

        for (verse, height) in detail.verses.iter().zip(verse_heights) {
            scroll_view.render_widget(
                VerseCard::new(verse, self.reorder_rtl),
                Rect::new(0, y, content_width, height),
            );
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl<'a> Component for ChapterDetail<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [hint_area, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        if matches!(self.status, QueryStatus::Loading) {
            Spinner::new(self.spinner_frame).render(frame, area);
            return;
        }

        frame.render_widget(
            Line::styled(BACK_HINT, Style::default().fg(Color::Cyan)),
            hint_area,
        );

        match self.status {
            QueryStatus::Error(_) => {
                let [error_area] = Layout::vertical([Constraint::Length(3)]).areas(body);
                let error = Paragraph::new(DETAIL_ERROR)
                    .style(Style::default().fg(Color::Red))
                    .centered()
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(Color::Red)),
                    );
                frame.render_widget(error, error_area);
            }
            QueryStatus::Success(Payload::Chapter(detail)) => {
                self.render_chapter(frame, body, detail);
            }
            _ => {}
        }
    }
}
