//! View rendering dispatch.

pub mod home;
pub mod login;
pub mod not_found;
pub mod note_detail;
pub mod note_form;
pub mod note_list;
pub mod profile;
pub mod register;

use crate::nav::Route;
use crate::notifications::NotificationLevel;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.route {
        Route::Home => home::render(f, app, layout[1]),
        Route::Login => login::render(f, app, layout[1]),
        Route::Register => register::render(f, app, layout[1]),
        Route::Profile => profile::render(f, app, layout[1]),
        Route::NoteList => note_list::render(f, app, layout[1]),
        Route::NoteCreate | Route::NoteEdit(_) => note_form::render(f, app, layout[1]),
        Route::NoteDetail(_) => note_detail::render(f, app, layout[1]),
        Route::NotFound => not_found::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let session = match &app.auth.user {
        Some(user) => user.email.clone(),
        None if app.auth.is_authenticated() => "signed in".to_string(),
        None => "guest".to_string(),
    };
    let title = format!("WAYPOINT | {} | {}", app.route.title(), session);
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let help = match app.route {
        Route::Home => "Enter notes • q quit",
        Route::Login => "Tab next field • Enter submit • Ctrl-r register • Esc back",
        Route::Register => "Tab next field • Enter submit • Ctrl-l log in • Esc back",
        Route::Profile => "L logout • Esc back • q quit",
        Route::NoteList => "j/k move • Enter open • n new • e edit • d delete • / search • q quit",
        Route::NoteDetail(_) => "g generate • i edit plan • s save • u discard • e edit note • Esc back",
        Route::NoteCreate | Route::NoteEdit(_) => "Tab next field • Enter submit • Esc cancel",
        Route::NotFound => "Esc back • q quit",
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        let color = match note.level {
            NotificationLevel::Info => app.theme.primary,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
            NotificationLevel::Success => app.theme.success,
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
