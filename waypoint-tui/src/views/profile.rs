//! Profile screen.

use crate::state::App;
use crate::widgets::DetailPanel;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    match &app.auth.user {
        Some(user) => {
            let fields = vec![
                ("User ID", user.id.to_string()),
                ("Email", user.email.clone()),
                ("Member since", user.created_at.format("%Y-%m-%d").to_string()),
            ];
            let detail = DetailPanel {
                title: "Profile",
                fields,
                style: Style::default().fg(app.theme.secondary),
            };
            detail.render(f, area);
        }
        None => {
            let loading = Paragraph::new("Loading profile...")
                .style(Style::default().fg(app.theme.text_dim));
            f.render_widget(loading, area);
        }
    }
}
