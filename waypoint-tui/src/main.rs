//! Waypoint TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};
use waypoint_api::types::{
    ListNotesRequest, LoginRequest, NoteCreateRequest, NoteUpdateRequest, PlanCreateRequest,
    PlanUpdateRequest, RegisterRequest,
};
use waypoint_core::NoteId;
use waypoint_tui::api_client::RestClient;
use waypoint_tui::config::TuiConfig;
use waypoint_tui::error::TuiError;
use waypoint_tui::errors::{AppError, SESSION_EXPIRED_MESSAGE};
use waypoint_tui::events::{ApiEvent, TuiEvent};
use waypoint_tui::keys::{map_key, Action};
use waypoint_tui::nav::Route;
use waypoint_tui::notifications::Notification;
use waypoint_tui::persistence::{self, PersistedSession};
use waypoint_tui::state::form::NoteFormState;
use waypoint_tui::state::notes::FetchToken;
use waypoint_tui::state::{App, InputMode};
use waypoint_tui::views::render_view;
use waypoint_tui::{logging, state};

const TICK_INTERVAL: Duration = Duration::from_millis(50);

type EventSender = mpsc::Sender<TuiEvent>;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    logging::init(&config.log_path)?;
    let api = RestClient::new(&config)?;
    let mut app = App::new(config, api);

    let mut start_route = Route::Home;
    if let Ok(Some(session)) = persistence::load(&app.config.session_path) {
        if let Some(token) = session.access_token.filter(|t| !t.is_empty()) {
            app.api.set_token(token.clone());
            app.auth.token = Some(token);
            start_route = session.last_route;
        }
    }

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    app.navigate(start_route);
    after_navigate(&mut app, &event_tx);
    if app.auth.is_authenticated() {
        spawn_profile_load(&app, &event_tx);
    }
    info!(route = ?app.route, "started");

    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                poll_search(&mut app, &event_tx);
            }
            Some(event) = event_rx.recv() => {
                handle_event(&mut app, event, &event_tx);
            }
        }

        if app.should_quit {
            break;
        }
    }

    let persisted = PersistedSession {
        access_token: app.auth.token.clone(),
        last_route: app.route,
    };
    if let Err(err) = persistence::save(&app.config.session_path, &persisted) {
        error!(%err, "failed to persist session");
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: EventSender) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(app: &mut App, event: TuiEvent, tx: &EventSender) {
    match event {
        TuiEvent::Input(key) => match app.input_mode {
            InputMode::Normal => {
                if let Some(action) = map_key(key) {
                    handle_action(app, action, tx);
                }
            }
            InputMode::Search => handle_search_key(app, key, tx),
            InputMode::Form => handle_form_key(app, key, tx),
            InputMode::PlanEditor => handle_plan_editor_key(app, key),
        },
        TuiEvent::Api(api_event) => apply_api_event(app, api_event, tx),
        TuiEvent::Resize { .. } | TuiEvent::Tick => {}
    }
}

fn handle_action(app: &mut App, action: Action, tx: &EventSender) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::Cancel => {
            let back = back_route(app.route);
            app.navigate(back);
            after_navigate(app, tx);
        }
        Action::Confirm => match app.route {
            Route::Home => {
                app.navigate(Route::NoteList);
                after_navigate(app, tx);
            }
            Route::NoteList => {
                if let Some(note) = app.notes.selected_note() {
                    let id = note.id;
                    app.open_note = Some(note.clone());
                    app.navigate(Route::NoteDetail(id));
                    after_navigate(app, tx);
                }
            }
            _ => {}
        },
        Action::MoveDown => {
            if app.route == Route::NoteList && app.notes.select_next() {
                // Cursor hit the bottom of the loaded window.
                if let Some((token, offset)) = app.notes.begin_load_more() {
                    spawn_list_fetch(app, tx, token, offset);
                }
            }
        }
        Action::MoveUp => {
            if app.route == Route::NoteList {
                app.notes.select_prev();
            }
        }
        Action::NewItem => {
            if app.route == Route::NoteList {
                app.note_form = NoteFormState::new();
                app.navigate(Route::NoteCreate);
                after_navigate(app, tx);
            }
        }
        Action::EditItem => {
            let note = match app.route {
                Route::NoteList => app.notes.selected_note().cloned(),
                Route::NoteDetail(_) => app.open_note.clone(),
                _ => None,
            };
            if let Some(note) = note {
                app.note_form = NoteFormState::from_note(&note);
                app.open_note = Some(note.clone());
                app.navigate(Route::NoteEdit(note.id));
                after_navigate(app, tx);
            }
        }
        Action::DeleteItem => {
            if app.route == Route::NoteList {
                if let Some(note) = app.notes.selected_note() {
                    spawn_note_delete(app, tx, note.id);
                }
            }
        }
        Action::OpenSearch => {
            if app.route == Route::NoteList {
                app.input_mode = InputMode::Search;
            }
        }
        Action::Refresh => refresh_route(app, tx),
        Action::GeneratePlan => {
            if let Route::NoteDetail(note_id) = app.route {
                if !app.plan.is_generating && !app.plan.is_saving {
                    app.plan.is_generating = true;
                    spawn_plan_generate(app, tx, note_id);
                }
            }
        }
        Action::SavePlan => {
            if let Route::NoteDetail(note_id) = app.route {
                app.flush_plan_editor();
                if app.plan.can_save() {
                    app.plan.is_saving = true;
                    spawn_plan_save(app, tx, note_id);
                } else if app.plan.text_too_long() {
                    app.notify(Notification::error("Plan text is over the length limit."));
                }
            }
        }
        Action::DiscardPlan => {
            if matches!(app.route, Route::NoteDetail(_)) && app.plan.can_discard() {
                app.plan.discard();
                app.reload_plan_editor();
                app.notify(Notification::info("Plan changes discarded."));
            }
        }
        Action::EditPlan => {
            if matches!(app.route, Route::NoteDetail(_)) {
                app.input_mode = InputMode::PlanEditor;
            }
        }
        Action::OpenProfile => {
            app.navigate(Route::Profile);
            after_navigate(app, tx);
        }
        Action::Logout => {
            app.logout();
            if let Err(err) = persistence::clear(&app.config.session_path) {
                error!(%err, "failed to clear session file");
            }
            app.navigate(Route::Home);
            app.notify(Notification::info("Logged out."));
        }
        Action::OpenHelp => {
            app.notify(Notification::info(
                "j/k move, Enter open, n new, e edit, d delete, / search, g generate, s save, q quit",
            ));
        }
    }
}

fn back_route(route: Route) -> Route {
    match route {
        Route::Home => Route::Home,
        Route::Login | Route::Register => Route::Home,
        Route::Profile | Route::NoteCreate | Route::NotFound => Route::NoteList,
        Route::NoteList => Route::Home,
        Route::NoteDetail(_) => Route::NoteList,
        Route::NoteEdit(note_id) => Route::NoteDetail(note_id),
    }
}

/// Load whatever the freshly entered route needs.
fn after_navigate(app: &mut App, tx: &EventSender) {
    match app.route {
        Route::Login | Route::Register | Route::NoteCreate | Route::NoteEdit(_) => {
            app.input_mode = InputMode::Form;
        }
        _ => {}
    }
    match app.route {
        Route::NoteList => {
            let token = app.notes.begin_initial_load();
            spawn_list_fetch(app, tx, token, 0);
        }
        Route::NoteDetail(note_id) => {
            app.plan.set_active_note(note_id);
            app.plan.is_loading = true;
            app.reload_plan_editor();
            if app.open_note.as_ref().map(|n| n.id) != Some(note_id) {
                app.open_note = None;
                spawn_note_load(app, tx, note_id);
            }
            spawn_plan_load(app, tx, note_id);
        }
        Route::NoteEdit(note_id) => {
            if app.open_note.as_ref().map(|n| n.id) != Some(note_id) {
                spawn_note_load(app, tx, note_id);
            }
        }
        Route::Profile => {
            if app.auth.user.is_none() {
                spawn_profile_load(app, tx);
            }
        }
        _ => {}
    }
}

fn refresh_route(app: &mut App, tx: &EventSender) {
    match app.route {
        Route::NoteList => {
            let token = match app.notes.current_search().map(str::to_string) {
                Some(query) => app.notes.begin_search(query),
                None => app.notes.begin_initial_load(),
            };
            spawn_list_fetch(app, tx, token, 0);
        }
        Route::NoteDetail(note_id) => {
            spawn_note_load(app, tx, note_id);
            app.plan.is_loading = true;
            spawn_plan_load(app, tx, note_id);
        }
        Route::Profile => spawn_profile_load(app, tx),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent, tx: &EventSender) {
    match key.code {
        KeyCode::Esc => {
            if app.search.clear() {
                let token = app.notes.clear_search();
                spawn_list_fetch(app, tx, token, 0);
            }
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Char(c) => app.search.push_char(Instant::now(), c),
        KeyCode::Backspace => app.search.backspace(Instant::now()),
        _ => {}
    }
}

/// Commit the search draft once it has been stable past the debounce delay.
fn poll_search(app: &mut App, tx: &EventSender) {
    if app.route != Route::NoteList {
        return;
    }
    if let Some(query) = app.search.poll(Instant::now()) {
        let token = if query.is_empty() {
            app.notes.clear_search()
        } else {
            app.notes.begin_search(query)
        };
        spawn_list_fetch(app, tx, token, 0);
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent, tx: &EventSender) {
    match app.route {
        Route::Login => handle_login_key(app, key, tx),
        Route::Register => handle_register_key(app, key, tx),
        Route::NoteCreate | Route::NoteEdit(_) => handle_note_form_key(app, key, tx),
        _ => app.input_mode = InputMode::Normal,
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent, tx: &EventSender) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('r') {
            app.navigate(Route::Register);
            after_navigate(app, tx);
        }
        return;
    }
    match key.code {
        KeyCode::Esc => {
            app.navigate(Route::Home);
            after_navigate(app, tx);
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.login_form.next_field();
        }
        KeyCode::Enter => {
            if app.login_form.can_submit() {
                app.login_form.is_submitting = true;
                app.login_form.error = None;
                app.auth.begin();
                spawn_login(app, tx);
            }
        }
        KeyCode::Char(c) => app.login_form.push_char(c),
        KeyCode::Backspace => app.login_form.backspace(),
        _ => {}
    }
}

fn handle_register_key(app: &mut App, key: KeyEvent, tx: &EventSender) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('l') {
            app.navigate(Route::Login);
            after_navigate(app, tx);
        }
        return;
    }
    match key.code {
        KeyCode::Esc => {
            app.navigate(Route::Home);
            after_navigate(app, tx);
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.register_form.next_field();
        }
        KeyCode::Enter => {
            if app.register_form.can_submit() {
                app.register_form.is_submitting = true;
                app.register_form.error = None;
                spawn_register(app, tx);
            }
        }
        KeyCode::Char(c) => app.register_form.push_char(c),
        KeyCode::Backspace => app.register_form.backspace(),
        _ => {}
    }
}

fn handle_note_form_key(app: &mut App, key: KeyEvent, tx: &EventSender) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match key.code {
        KeyCode::Esc => {
            let back = back_route(app.route);
            app.navigate(back);
            after_navigate(app, tx);
        }
        KeyCode::Tab | KeyCode::Down => app.note_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.note_form.prev_field(),
        KeyCode::Enter => {
            if app.note_form.is_submitting {
                return;
            }
            match app.route {
                Route::NoteCreate => {
                    if let Some(request) = app.note_form.to_create_request() {
                        app.note_form.is_submitting = true;
                        spawn_note_create(app, tx, request);
                    }
                }
                Route::NoteEdit(note_id) => {
                    if let Some(request) = app.note_form.to_update_request() {
                        app.note_form.is_submitting = true;
                        spawn_note_update(app, tx, note_id, request);
                    }
                }
                _ => {}
            }
        }
        KeyCode::Char(c) => app.note_form.push_char(c),
        KeyCode::Backspace => app.note_form.backspace(),
        _ => {}
    }
}

fn handle_plan_editor_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.flush_plan_editor();
        app.input_mode = InputMode::Normal;
        return;
    }
    app.plan_editor.input(key);
    // Keep the derived type and character counter live while typing.
    app.flush_plan_editor();
}

// ----------------------------------------------------------------------------
// API task spawns
// ----------------------------------------------------------------------------

fn spawn_login(app: &App, tx: &EventSender) {
    let api = app.api.clone();
    let request = LoginRequest {
        username: app.login_form.email.trim().to_string(),
        password: app.login_form.password.clone(),
    };
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.login(&request).await;
        let _ = tx.send(TuiEvent::Api(ApiEvent::LoginFinished(result))).await;
    });
}

fn spawn_register(app: &App, tx: &EventSender) {
    let api = app.api.clone();
    let request = RegisterRequest {
        email: app.register_form.email.trim().to_string(),
        password: app.register_form.password.clone(),
    };
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.register(&request).await;
        let _ = tx
            .send(TuiEvent::Api(ApiEvent::RegisterFinished(result)))
            .await;
    });
}

fn spawn_profile_load(app: &App, tx: &EventSender) {
    let api = app.api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.me().await;
        let _ = tx.send(TuiEvent::Api(ApiEvent::ProfileLoaded(result))).await;
    });
}

fn spawn_list_fetch(app: &App, tx: &EventSender, token: FetchToken, offset: i64) {
    let api = app.api.clone();
    let params = ListNotesRequest {
        offset: Some(offset),
        limit: Some(app.notes.page_size),
        search_title: app.notes.current_search().map(str::to_string),
    };
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.list_notes(&params).await;
        let _ = tx
            .send(TuiEvent::Api(ApiEvent::NotesPage {
                token,
                request_offset: offset,
                result,
            }))
            .await;
    });
}

fn spawn_note_load(app: &App, tx: &EventSender, note_id: NoteId) {
    let api = app.api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.get_note(note_id).await;
        let _ = tx.send(TuiEvent::Api(ApiEvent::NoteLoaded(result))).await;
    });
}

fn spawn_note_create(app: &App, tx: &EventSender, request: NoteCreateRequest) {
    let api = app.api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.create_note(&request).await;
        let _ = tx.send(TuiEvent::Api(ApiEvent::NoteCreated(result))).await;
    });
}

fn spawn_note_update(app: &App, tx: &EventSender, note_id: NoteId, request: NoteUpdateRequest) {
    let api = app.api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.update_note(note_id, &request).await;
        let _ = tx.send(TuiEvent::Api(ApiEvent::NoteUpdated(result))).await;
    });
}

fn spawn_note_delete(app: &App, tx: &EventSender, note_id: NoteId) {
    let api = app.api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.delete_note(note_id).await;
        let _ = tx
            .send(TuiEvent::Api(ApiEvent::NoteDeleted { note_id, result }))
            .await;
    });
}

fn spawn_plan_load(app: &App, tx: &EventSender, note_id: NoteId) {
    let api = app.api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.get_active_plan(note_id).await;
        let _ = tx
            .send(TuiEvent::Api(ApiEvent::PlanLoaded { note_id, result }))
            .await;
    });
}

fn spawn_plan_generate(app: &App, tx: &EventSender, note_id: NoteId) {
    let api = app.api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.generate_plan(note_id).await;
        let _ = tx
            .send(TuiEvent::Api(ApiEvent::PlanGenerated { note_id, result }))
            .await;
    });
}

fn spawn_plan_save(app: &App, tx: &EventSender, note_id: NoteId) {
    let api = app.api.clone();
    let tx = tx.clone();
    let plan_text = app.plan.text.clone();
    let plan_type = app.plan.plan_type;
    let generation_id = app.plan.generation_id;
    let update = app.plan.has_persisted_plan();
    tokio::spawn(async move {
        let result = if update {
            let request = PlanUpdateRequest {
                plan_text,
                plan_type,
            };
            api.update_plan(note_id, &request).await
        } else {
            let request = PlanCreateRequest {
                plan_text,
                plan_type,
                generation_id,
            };
            api.create_plan(note_id, &request).await
        };
        let _ = tx
            .send(TuiEvent::Api(ApiEvent::PlanSaved { note_id, result }))
            .await;
    });
}

// ----------------------------------------------------------------------------
// API completions
// ----------------------------------------------------------------------------

fn apply_api_event(app: &mut App, event: ApiEvent, tx: &EventSender) {
    match event {
        ApiEvent::LoginFinished(result) => match result {
            Ok(token) => {
                app.auth.login_succeeded(token.access_token);
                app.login_form.reset();
                let target = app.take_return_route();
                app.navigate(target);
                after_navigate(app, tx);
                spawn_profile_load(app, tx);
                info!("logged in");
            }
            Err(err) => {
                let message = err.user_message().to_string();
                app.login_form.is_submitting = false;
                app.login_form.error = Some(message.clone());
                app.auth.failed(message);
            }
        },
        ApiEvent::RegisterFinished(result) => match result {
            Ok(user) => {
                app.register_form.is_submitting = false;
                app.login_form.reset();
                app.login_form.email = user.email;
                app.navigate(Route::Login);
                after_navigate(app, tx);
                app.notify(Notification::success("Account created. Please log in."));
            }
            Err(err) => {
                app.register_form.is_submitting = false;
                app.register_form.error = Some(err.user_message().to_string());
            }
        },
        ApiEvent::ProfileLoaded(result) => match result {
            Ok(user) => app.auth.profile_loaded(user),
            Err(err) => {
                if !handle_session_expiry(app, &err) {
                    app.auth.is_loading = false;
                    app.notify(Notification::error(err.user_message()));
                }
            }
        },
        ApiEvent::NotesPage {
            token,
            request_offset,
            result,
        } => {
            if let Err(err) = &result {
                if handle_session_expiry(app, err) {
                    return;
                }
            }
            app.notes.apply_page(token, request_offset, result);
        }
        ApiEvent::NoteLoaded(result) => match result {
            Ok(note) => {
                let relevant = matches!(
                    app.route,
                    Route::NoteDetail(id) | Route::NoteEdit(id) if id == note.id
                );
                if relevant {
                    if app.route == Route::NoteEdit(note.id) && !app.note_form.is_submitting {
                        app.note_form = NoteFormState::from_note(&note);
                    }
                    app.open_note = Some(note);
                }
            }
            Err(err) => {
                if handle_session_expiry(app, &err) {
                    return;
                }
                if err.is_not_found() {
                    app.navigate(Route::NotFound);
                } else {
                    app.notify(Notification::error(err.user_message()));
                }
            }
        },
        ApiEvent::NoteCreated(result) => match result {
            Ok(note) => {
                app.note_form.is_submitting = false;
                app.notes.upsert(note.clone());
                app.open_note = Some(note.clone());
                app.notify(Notification::success("Note created."));
                app.navigate(Route::NoteDetail(note.id));
                after_navigate(app, tx);
            }
            Err(err) => apply_form_error(app, err),
        },
        ApiEvent::NoteUpdated(result) => match result {
            Ok(note) => {
                app.note_form.is_submitting = false;
                app.notes.upsert(note.clone());
                app.open_note = Some(note.clone());
                app.notify(Notification::success("Note updated."));
                app.navigate(Route::NoteDetail(note.id));
                after_navigate(app, tx);
            }
            Err(err) => apply_form_error(app, err),
        },
        ApiEvent::NoteDeleted { note_id, result } => match result {
            Ok(()) => {
                app.notes.remove(note_id);
                if app.route == Route::NoteDetail(note_id) || app.route == Route::NoteEdit(note_id)
                {
                    app.navigate(Route::NoteList);
                    after_navigate(app, tx);
                }
                app.notify(Notification::success("Note deleted."));
            }
            Err(err) => {
                if handle_session_expiry(app, &err) {
                    return;
                }
                if err.is_not_found() {
                    // Already gone server-side; drop it locally too.
                    app.notes.remove(note_id);
                }
                app.notify(Notification::error(err.user_message()));
            }
        },
        ApiEvent::PlanLoaded { note_id, result } => {
            if app.plan.active_note_id != Some(note_id) {
                return;
            }
            match result {
                Ok(Some(plan)) => {
                    app.plan.set_initial_plan_data(&plan);
                    app.reload_plan_editor();
                }
                Ok(None) => {
                    app.plan.set_no_plan();
                    app.reload_plan_editor();
                }
                Err(err) => {
                    if handle_session_expiry(app, &err) {
                        return;
                    }
                    app.plan.is_loading = false;
                    app.plan.error = Some(err.user_message().to_string());
                    app.notify(Notification::error(err.user_message()));
                }
            }
        }
        ApiEvent::PlanGenerated { note_id, result } => {
            if app.plan.active_note_id != Some(note_id) {
                return;
            }
            match result {
                Ok(generated) => {
                    app.plan
                        .record_generation(generated.plan_text, generated.generation_id);
                    app.reload_plan_editor();
                    app.notify(Notification::success(
                        "Plan generated. Edit it or press s to save.",
                    ));
                }
                Err(err) => {
                    app.plan.is_generating = false;
                    if handle_session_expiry(app, &err) {
                        return;
                    }
                    app.notify(Notification::error(err.user_message()));
                }
            }
        }
        ApiEvent::PlanSaved { note_id, result } => {
            if app.plan.active_note_id != Some(note_id) {
                return;
            }
            match result {
                Ok(plan) => {
                    app.plan.mark_saved(&plan);
                    app.reload_plan_editor();
                    app.notify(Notification::success("Plan saved."));
                }
                Err(err) => {
                    app.plan.is_saving = false;
                    if handle_session_expiry(app, &err) {
                        return;
                    }
                    app.notify(Notification::error(err.user_message()));
                }
            }
        }
    }
}

/// Note form submission failures: fold 422s onto fields, surface conflicts
/// inline, everything else goes to the notification bar.
fn apply_form_error(app: &mut App, err: AppError) {
    app.note_form.is_submitting = false;
    if handle_session_expiry(app, &err) {
        return;
    }
    match err {
        AppError::Validation(validation) => app.note_form.apply_server_errors(&validation),
        AppError::Conflict { user_message, .. } | AppError::BadRequest { user_message, .. } => {
            app.note_form.form_error = Some(user_message);
        }
        other => app.notify(Notification::error(other.user_message())),
    }
}

/// A 401 anywhere means the session is dead: drop it and bounce to login,
/// remembering where the user was. Returns true when the error was consumed.
fn handle_session_expiry(app: &mut App, err: &AppError) -> bool {
    if !err.is_authentication() || err.status_code() != 401 {
        return false;
    }
    let came_from = app.route;
    app.logout();
    if let Err(clear_err) = persistence::clear(&app.config.session_path) {
        error!(%clear_err, "failed to clear session file");
    }
    app.return_to = came_from.requires_auth().then_some(came_from);
    app.route = Route::Login;
    app.input_mode = InputMode::Form;
    app.login_form = state::form::CredentialsForm::new();
    app.notify(Notification::error(SESSION_EXPIRED_MESSAGE));
    true
}
