//! Note detail with the plan editor pane.

use crate::state::{App, InputMode};
use crate::theme::plan_type_color;
use crate::widgets::DetailPanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use waypoint_core::MAX_PLAN_TEXT_CHARS;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_note_panel(f, app, columns[0]);
    render_plan_panel(f, app, columns[1]);
}

fn render_note_panel(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(note) = &app.open_note else {
        let loading =
            Paragraph::new("Loading note...").style(Style::default().fg(app.theme.text_dim));
        f.render_widget(loading, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let fields = vec![
        ("Title", note.title.clone()),
        ("Place", note.place.clone()),
        ("From", note.date_from.to_string()),
        ("To", note.date_to.to_string()),
        ("People", note.number_of_people.to_string()),
    ];
    let detail = DetailPanel {
        title: "Trip",
        fields,
        style: Style::default().fg(app.theme.secondary),
    };
    detail.render(f, rows[0]);

    let key_ideas = note.key_ideas.clone().unwrap_or_else(|| "-".to_string());
    let ideas = Paragraph::new(key_ideas)
        .block(Block::default().title("Key ideas").borders(Borders::ALL))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(ideas, rows[1]);
}

fn render_plan_panel(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let type_color = plan_type_color(app.plan.plan_type, &app.theme);
    let mut badge = vec![
        Span::styled(
            format!(" {} ", app.plan.plan_type),
            Style::default().fg(app.theme.bg).bg(type_color),
        ),
        Span::raw(" "),
    ];
    if app.plan.is_modified() {
        badge.push(Span::styled(
            "modified",
            Style::default().fg(app.theme.warning),
        ));
    }
    if app.plan.is_generating {
        badge.push(Span::styled(
            " generating...",
            Style::default().fg(app.theme.text_dim),
        ));
    } else if app.plan.is_saving {
        badge.push(Span::styled(
            " saving...",
            Style::default().fg(app.theme.text_dim),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(badge)), rows[0]);

    let editing = app.input_mode == InputMode::PlanEditor;
    let border = if editing {
        Style::default().fg(app.theme.border_focus)
    } else {
        Style::default().fg(app.theme.border)
    };
    let title = if app.plan.has_persisted_plan() {
        "Plan"
    } else if app.plan.is_loading {
        "Plan (loading...)"
    } else {
        "Plan (none yet - press g to generate or i to write one)"
    };
    let mut editor = app.plan_editor.clone();
    editor.set_block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(editor.widget(), rows[1]);

    let chars = app.plan.text.chars().count();
    let counter_color = if app.plan.text_too_long() {
        app.theme.error
    } else {
        app.theme.text_muted
    };
    let counter = Paragraph::new(format!("{}/{}", chars, MAX_PLAN_TEXT_CHARS))
        .style(Style::default().fg(counter_color));
    f.render_widget(counter, rows[2]);
}
