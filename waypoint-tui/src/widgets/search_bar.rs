//! Title search bar.
//!
//! Shows the draft while typing and the committed filter once it takes
//! effect; the two can differ during the debounce window.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SearchBar<'a> {
    pub draft: &'a str,
    pub committed: &'a str,
    pub focused: bool,
    pub text_style: Style,
    pub hint_style: Style,
    pub focus_style: Style,
}

impl<'a> SearchBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = vec![Span::styled(self.draft.to_string(), self.text_style)];
        if self.focused {
            spans.push(Span::styled("_", self.text_style));
        }
        if self.draft != self.committed && !self.committed.is_empty() {
            spans.push(Span::styled(
                format!("  (showing: {})", self.committed),
                self.hint_style,
            ));
        }
        if self.draft.is_empty() && !self.focused {
            spans = vec![Span::styled("press / to search by title", self.hint_style)];
        }

        let border_style = if self.focused {
            self.focus_style
        } else {
            self.hint_style
        };
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title("Search")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(paragraph, area);
    }
}
