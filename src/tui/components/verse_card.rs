use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::api::Verse;
use crate::tui::rtl::wrap_rtl;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A single verse: its in-chapter ordinal in the border title and the
/// wrapped, right-aligned text inside.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) wraps with the same function
/// the widget renders with, so the parent can lay out the scroll canvas
/// without rendering every card first.
#[derive(Clone, Copy)]
pub struct VerseCard<'a> {
    pub verse: &'a Verse,
    pub reorder_rtl: bool,
}

impl<'a> VerseCard<'a> {
    pub fn new(verse: &'a Verse, reorder_rtl: bool) -> Self {
        Self { verse, reorder_rtl }
    }

    fn content_width(width: u16) -> u16 {
        width.saturating_sub(HORIZONTAL_OVERHEAD)
    }

    pub fn calculate_height(verse: &Verse, width: u16, reorder_rtl: bool) -> u16 {
        let content_width = Self::content_width(width);
        if content_width == 0 {
            // Too narrow for borders + padding; still occupy a row.
            return 1;
        }
        let lines = wrap_rtl(&verse.text, content_width, reorder_rtl).len() as u16;
        lines.max(1) + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for VerseCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::DIM);
        let title_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::styled(
                format!(" {} ", self.verse.number_in_chapter),
                title_style,
            ))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = wrap_rtl(
            &self.verse.text,
            Self::content_width(area.width),
            self.reorder_rtl,
        )
        .into_iter()
        .map(|line| Line::from(line).right_aligned())
        .collect();

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .render(inner_area, buf);
    }
}
