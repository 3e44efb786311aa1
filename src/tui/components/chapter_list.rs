//! # Chapter List View
//!
//! The home screen: a heading and one card per chapter, in the order the API
//! returned them. Enter on a card opens that chapter.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChapterListState` lives in `TuiState`
//! - `ChapterList` is created each frame with borrowed state and the
//!   current query status as props
//!
//! ```text
//! Loading  → heading + spinner
//! Error    → heading + static message, no retry control
//! Success  → heading + selectable cards
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Wrap};

use crate::api::ChapterSummary;
use crate::core::query::{Payload, QueryStatus};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::spinner::Spinner;
use crate::tui::event::TuiEvent;
use crate::tui::rtl::reorder_clusters;

pub const LIST_ERROR: &str = "Failed to load surahs. Please try again later.";

const HEADING_HEIGHT: u16 = 4;
/// Rows per card: four text lines plus a blank separator.
const CARD_HEIGHT: usize = 5;

/// Persistent selection state for the chapter list.
pub struct ChapterListState {
    pub list_state: ListState,
    /// Number of cards at the last render.
    pub len: usize,
    /// Cards that fit on screen at the last render.
    pub page_size: usize,
}

impl Default for ChapterListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChapterListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            len: 0,
            page_size: 1,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Records the card count and keeps the selection inside it.
    fn sync_len(&mut self, len: usize) {
        self.len = len;
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, self.len as isize - 1);
        self.list_state.select(Some(target as usize));
    }
}

/// Events emitted by the chapter list.
#[derive(Debug, PartialEq, Eq)]
pub enum ListEvent {
    /// Open the card at this index.
    Open(usize),
}

impl EventHandler for ChapterListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        let page = self.page_size.max(1) as isize;
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.move_by(-1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-page),
            TuiEvent::PageDown => self.move_by(page),
            TuiEvent::Top => self.move_by(-(self.len as isize)),
            TuiEvent::Bottom => self.move_by(self.len as isize),
            TuiEvent::Submit => {
                return self
                    .list_state
                    .selected()
                    .filter(|&i| i < self.len)
                    .map(ListEvent::Open);
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the chapter list.
pub struct ChapterList<'a> {
    pub state: &'a mut ChapterListState,
    pub status: QueryStatus<'a>,
    pub spinner_frame: usize,
    pub reorder_rtl: bool,
}

impl<'a> ChapterList<'a> {
    pub fn new(
        state: &'a mut ChapterListState,
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

    fn heading(&self) -> Paragraph<'static> {
        let lines = vec![
            Line::styled(
                self.rtl("القرآن الكريم"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled("The Noble Qur'an", Style::default().fg(Color::White)),
            Line::styled(
                "Read and reflect upon the words of Allah",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        Paragraph::new(lines).centered()
    }

    fn card(&self, chapter: &ChapterSummary) -> ListItem<'static> {
        let indent = "      ";
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{:>4}  ", chapter.number),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.rtl(&chapter.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    chapter.english_name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    chapter.english_name_translation.clone(),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    chapter.verse_count_label(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", chapter.revelation_type),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::default(),
        ];
        ListItem::new(Text::from(lines))
    }
}

impl<'a> Component for ChapterList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, body] =
            Layout::vertical([Constraint::Length(HEADING_HEIGHT), Constraint::Min(0)])
                .areas(area);

        frame.render_widget(self.heading(), heading_area);

        let chapters = match self.status {
            QueryStatus::Loading => {
                Spinner::new(self.spinner_frame).render(frame, body);
                return;
            }
            QueryStatus::Error(_) => {
                let [error_area] = Layout::vertical([Constraint::Length(3)]).areas(body);
                let error = Paragraph::new(LIST_ERROR)
                    .style(Style::default().fg(Color::Red))
                    .centered()
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::bordered()
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(Color::Red)),
                    );
                frame.render_widget(error, error_area);
                return;
            }
            QueryStatus::Success(Payload::Chapters(chapters)) => chapters,
            QueryStatus::Success(Payload::Chapter(_)) | QueryStatus::Idle => return,
        };

        self.state.sync_len(chapters.len());
        self.state.page_size = (body.height as usize / CARD_HEIGHT).max(1);

        if chapters.is_empty() {
            let empty = Paragraph::new("No surahs.")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, body);
            return;
        }

        let items: Vec<ListItem> = chapters.iter().map(|c| self.card(c)).collect();
        let list = List::new(items)
            .highlight_symbol("▌")
            .highlight_style(Style::default().bg(Color::Rgb(30, 30, 40)));

        frame.render_stateful_widget(list, body, &mut self.state.list_state);
    }
}
