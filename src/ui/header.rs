use crate::range::DateRange;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, NASA_RED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, range: DateRange, fact: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Space Explorer",
                Style::default().fg(NASA_RED).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(range.to_string(), text_style),
        ]);
        let fact = Line::from(vec![
            Span::styled("  Did you know? ", text_style.add_modifier(Modifier::BOLD)),
            Span::styled(fact.to_string(), text_style.add_modifier(Modifier::ITALIC)),
        ]);

        Paragraph::new(vec![title, fact]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
