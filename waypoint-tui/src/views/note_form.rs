//! Note create/edit form.

use crate::state::form::NoteField;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let form = &app.note_form;
    let outer = Block::default()
        .title(app.route.title())
        .borders(Borders::ALL);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let buffers = [
        (NoteField::Title, &form.title),
        (NoteField::Place, &form.place),
        (NoteField::DateFrom, &form.date_from),
        (NoteField::DateTo, &form.date_to),
        (NoteField::NumberOfPeople, &form.number_of_people),
        (NoteField::KeyIdeas, &form.key_ideas),
    ];

    for (i, (field, buffer)) in buffers.iter().enumerate() {
        let focused = form.focus == *field;
        let errors = form.field_errors(*field);
        let border = if !errors.is_empty() {
            Style::default().fg(app.theme.error)
        } else if focused {
            Style::default().fg(app.theme.border_focus)
        } else {
            Style::default().fg(app.theme.border)
        };

        let mut lines = vec![Line::from(buffer.as_str())];
        for error in errors {
            lines.push(Line::from(Span::styled(
                error,
                Style::default().fg(app.theme.error),
            )));
        }
        let widget = Paragraph::new(lines).block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border),
        );
        f.render_widget(widget, rows[i]);
    }

    let status = if form.is_submitting {
        Paragraph::new("Saving...").style(Style::default().fg(app.theme.text_dim))
    } else if let Some(error) = &form.form_error {
        Paragraph::new(error.as_str()).style(Style::default().fg(app.theme.error))
    } else {
        Paragraph::new("Enter submits from any field.")
            .style(Style::default().fg(app.theme.text_muted))
    };
    f.render_widget(status, rows[6]);
}
