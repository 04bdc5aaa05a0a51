//! Fallback screen for dead ends.

use crate::state::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = vec![
        Line::from("Nothing here."),
        Line::from(""),
        Line::from("The item may have been deleted. Press Esc to go back."),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.text_dim))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
