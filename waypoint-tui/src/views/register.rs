//! Registration screen.

use crate::state::App;
use crate::views::login::render_credentials;
use ratatui::{layout::Rect, Frame};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    render_credentials(
        f,
        app,
        area,
        &app.register_form,
        "Register",
        "Already registered? Ctrl-l to log in.",
    );
}
