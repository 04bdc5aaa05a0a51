//! Login screen.

use crate::state::form::{CredentialsField, CredentialsForm};
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    render_credentials(f, app, area, &app.login_form, "Log in", "New here? Ctrl-r to register.");
}

pub(super) fn render_credentials(
    f: &mut Frame<'_>,
    app: &App,
    area: Rect,
    form: &CredentialsForm,
    title: &str,
    hint: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let outer = Block::default().title(title).borders(Borders::ALL);
    f.render_widget(outer, area);

    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(app.theme.border_focus)
        } else {
            Style::default().fg(app.theme.border)
        }
    };

    let email = Paragraph::new(form.email.as_str()).block(
        Block::default()
            .title("Email")
            .borders(Borders::ALL)
            .border_style(field_style(form.focus == CredentialsField::Email)),
    );
    f.render_widget(email, chunks[0]);

    let masked: String = form.password.chars().map(|_| '*').collect();
    let password = Paragraph::new(masked).block(
        Block::default()
            .title("Password")
            .borders(Borders::ALL)
            .border_style(field_style(form.focus == CredentialsField::Password)),
    );
    f.render_widget(password, chunks[1]);

    let status = if form.is_submitting {
        Paragraph::new("Submitting...").style(Style::default().fg(app.theme.text_dim))
    } else if let Some(error) = &form.error {
        Paragraph::new(error.as_str()).style(Style::default().fg(app.theme.error))
    } else {
        Paragraph::new(hint).style(Style::default().fg(app.theme.text_muted))
    };
    f.render_widget(status, chunks[2]);
}
