//! Note list with search and infinite scroll.

use crate::state::{App, InputMode};
use crate::widgets::{DetailPanel, SearchBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let search = SearchBar {
        draft: app.search.draft(),
        committed: &app.notes.search_query,
        focused: app.input_mode == InputMode::Search,
        text_style: Style::default().fg(app.theme.text),
        hint_style: Style::default().fg(app.theme.text_muted),
        focus_style: Style::default().fg(app.theme.border_focus),
    };
    search.render(f, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let items: Vec<ListItem> = app
        .notes
        .notes
        .iter()
        .map(|note| {
            ListItem::new(format!(
                "{}  ({} - {})",
                note.title, note.date_from, note.date_to
            ))
        })
        .collect();

    let mut state = ListState::default();
    state.select(app.notes.selected_index());

    let list_title = if app.notes.is_searching() {
        format!("Notes matching \"{}\"", app.notes.search_query)
    } else {
        format!("Notes ({}/{})", app.notes.notes.len(), app.notes.total)
    };
    let list = List::new(items)
        .block(Block::default().title(list_title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .bg(app.theme.bg_highlight),
        );
    f.render_stateful_widget(list, columns[0], &mut state);

    if let Some(note) = app.notes.selected_note() {
        let fields = vec![
            ("Place", note.place.clone()),
            ("From", note.date_from.to_string()),
            ("To", note.date_to.to_string()),
            ("People", note.number_of_people.to_string()),
            (
                "Key ideas",
                note.key_ideas.clone().unwrap_or_else(|| "-".to_string()),
            ),
        ];
        let detail = DetailPanel {
            title: "Preview",
            fields,
            style: Style::default().fg(app.theme.secondary),
        };
        detail.render(f, columns[1]);
    } else {
        let placeholder = if app.notes.is_loading {
            "Loading notes..."
        } else if app.notes.is_searching() {
            "No notes match this search."
        } else {
            "No notes yet. Press n to create one."
        };
        let paragraph = Paragraph::new(placeholder)
            .style(Style::default().fg(app.theme.text_dim))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Preview").borders(Borders::ALL));
        f.render_widget(paragraph, columns[1]);
    }

    let status = if let Some(error) = &app.notes.error {
        (error.as_str(), app.theme.error)
    } else if app.notes.is_loading {
        ("Loading...", app.theme.text_dim)
    } else if app.notes.all_loaded {
        ("All notes loaded.", app.theme.text_muted)
    } else if app.notes.has_more {
        ("Scroll down for more.", app.theme.text_muted)
    } else {
        ("", app.theme.text_muted)
    };
    let footer = Paragraph::new(status.0).style(Style::default().fg(status.1));
    f.render_widget(footer, rows[2]);
}
