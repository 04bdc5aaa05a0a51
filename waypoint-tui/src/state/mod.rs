//! Application state.

pub mod auth;
pub mod form;
pub mod notes;
pub mod plan;

use crate::api_client::RestClient;
use crate::config::TuiConfig;
use crate::debounce::DebouncedInput;
use crate::nav::{self, Guarded, Route};
use crate::notifications::Notification;
use crate::theme::HarborTheme;
use auth::AuthState;
use form::{CredentialsForm, NoteFormState};
use notes::NotesState;
use plan::PlanState;
use std::time::Duration;
use tui_textarea::TextArea;
use waypoint_api::types::NoteResponse;

/// Which surface is consuming raw key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys map to actions.
    #[default]
    Normal,
    /// Keys go to the search bar.
    Search,
    /// Keys go to the focused form field.
    Form,
    /// Keys go to the plan text editor.
    PlanEditor,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: HarborTheme,
    pub api: RestClient,
    pub route: Route,
    /// Where to land after a login forced by a guard.
    pub return_to: Option<Route>,
    pub input_mode: InputMode,

    pub auth: AuthState,
    pub notes: NotesState,
    pub plan: PlanState,

    pub login_form: CredentialsForm,
    pub register_form: CredentialsForm,
    pub note_form: NoteFormState,
    pub search: DebouncedInput,
    /// The note open on the detail screen.
    pub open_note: Option<NoteResponse>,
    pub plan_editor: TextArea<'static>,

    pub notifications: Vec<Notification>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: TuiConfig, api: RestClient) -> Self {
        let theme = HarborTheme::harbor();
        let search = DebouncedInput::new(
            Duration::from_millis(config.search.debounce_ms),
            config.search.min_chars,
        );
        let notes = NotesState::new(config.page_size);
        Self {
            config,
            theme,
            api,
            route: Route::Home,
            return_to: None,
            input_mode: InputMode::Normal,
            auth: AuthState::new(),
            notes,
            plan: PlanState::new(),
            login_form: CredentialsForm::new(),
            register_form: CredentialsForm::new(),
            note_form: NoteFormState::new(),
            search,
            open_note: None,
            plan_editor: TextArea::default(),
            notifications: Vec::new(),
            should_quit: false,
        }
    }

    /// Apply guards and move to `target`. Returns the route actually landed
    /// on.
    pub fn navigate(&mut self, target: Route) -> Route {
        match nav::resolve(target, self.auth.is_authenticated()) {
            Guarded::Allow(route) => {
                self.route = route;
                self.input_mode = InputMode::Normal;
            }
            Guarded::RedirectToLogin { return_to } => {
                self.return_to = Some(return_to);
                self.route = Route::Login;
                self.input_mode = InputMode::Form;
                self.notify(Notification::info("Please log in to continue."));
            }
            Guarded::RedirectToNotes => {
                self.route = Route::NoteList;
                self.input_mode = InputMode::Normal;
            }
        }
        self.route
    }

    /// Route to return to after a successful login: the guarded target if
    /// one was remembered, otherwise the note list.
    pub fn take_return_route(&mut self) -> Route {
        self.return_to.take().unwrap_or(Route::NoteList)
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
        // Keep the backlog bounded; only the newest few are shown anyway.
        if self.notifications.len() > 16 {
            self.notifications.remove(0);
        }
    }

    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Sync the plan editor widget from the plan state. `split` rather than
    /// `lines` so a trailing newline survives the round trip as an empty
    /// final row.
    pub fn reload_plan_editor(&mut self) {
        let lines: Vec<String> = self.plan.text.split('\n').map(str::to_string).collect();
        self.plan_editor = TextArea::new(lines);
    }

    /// Sync the plan state from the editor widget.
    pub fn flush_plan_editor(&mut self) {
        let text = self.plan_editor.lines().join("\n");
        self.plan.update_text(text);
    }

    /// Full client-side logout: session state, token, caches.
    pub fn logout(&mut self) {
        self.auth.logout();
        self.api.clear_token();
        self.notes = NotesState::new(self.config.page_size);
        self.plan = PlanState::new();
        self.open_note = None;
        self.return_to = None;
    }
}
