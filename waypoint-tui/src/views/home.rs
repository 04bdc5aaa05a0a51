//! Landing screen.

use crate::state::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(30), Constraint::Min(0)])
        .split(area);

    let lines = vec![
        Line::from("Waypoint"),
        Line::from(""),
        Line::from("Keep travel notes, let the planner draft an itinerary,"),
        Line::from("and edit it into the trip you actually want."),
        Line::from(""),
        Line::from(if app.auth.is_authenticated() {
            "Press Enter to open your notes."
        } else {
            "Press Enter to log in."
        }),
    ];
    let welcome = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.text))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(welcome, chunks[1]);
}
