use chrono::{NaiveDate, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;
use std::time::{Duration, Instant};
use waypoint_api::types::{ListNotesResponse, NoteResponse};
use waypoint_core::{PlanType, MAX_PLAN_TEXT_CHARS};
use waypoint_tui::config::{SearchConfig, ThemeConfig, TuiConfig};
use waypoint_tui::debounce::DebouncedInput;
use waypoint_tui::keys::{map_key, Action};
use waypoint_tui::nav::{resolve, Guarded, Route};
use waypoint_tui::state::notes::NotesState;
use waypoint_tui::state::plan::{derive_plan_type, PlanState};

fn base_config() -> TuiConfig {
    TuiConfig {
        api_base_url: "http://localhost:8000".to_string(),
        request_timeout_ms: 10_000,
        page_size: 20,
        search: SearchConfig {
            debounce_ms: 400,
            min_chars: 2,
        },
        session_path: "tmp/waypoint-session.json".into(),
        log_path: "tmp/waypoint-tui.log".into(),
        theme: ThemeConfig {
            name: "harbor".to_string(),
        },
    }
}

fn note(id: i64) -> NoteResponse {
    NoteResponse {
        id,
        owner_id: 1,
        title: format!("note {id}"),
        place: "Porto".to_string(),
        date_from: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        date_to: NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
        number_of_people: 2,
        key_ideas: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn page(ids: std::ops::Range<i64>, total: i64) -> ListNotesResponse {
    ListNotesResponse {
        notes: ids.map(note).collect(),
        total,
    }
}

#[test]
fn config_requires_supported_theme() {
    let mut config = base_config();
    config.theme.name = "unknown".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_positive_page_size() {
    let mut config = base_config();
    config.page_size = 0;
    assert!(config.validate().is_err());
}

fn plan_type_strategy() -> impl Strategy<Value = Option<PlanType>> {
    prop_oneof![
        Just(None),
        Just(Some(PlanType::Manual)),
        Just(Some(PlanType::Ai)),
        Just(Some(PlanType::Hybrid)),
    ]
}

proptest! {
    // ------------------------------------------------------------------------
    // Plan type derivation
    // ------------------------------------------------------------------------

    #[test]
    fn derived_type_is_deterministic(
        text in ".{0,40}",
        saved in ".{0,40}",
        saved_type in plan_type_strategy(),
        ai in proptest::option::of(".{0,40}"),
    ) {
        let a = derive_plan_type(&text, &saved, saved_type, ai.as_deref());
        let b = derive_plan_type(&text, &saved, saved_type, ai.as_deref());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn no_ai_lineage_never_derives_ai_or_hybrid(
        text in ".{0,40}",
        saved in ".{0,40}",
        manual_saved in prop_oneof![Just(None), Just(Some(PlanType::Manual))],
    ) {
        let derived = derive_plan_type(&text, &saved, manual_saved, None);
        prop_assert_eq!(derived, PlanType::Manual);
    }

    #[test]
    fn text_matching_ai_output_is_never_manual(
        text in ".{0,40}",
        saved in ".{0,40}",
        saved_type in plan_type_strategy(),
    ) {
        let derived = derive_plan_type(&text, &saved, saved_type, Some(&text));
        prop_assert_ne!(derived, PlanType::Manual);
    }

    #[test]
    fn saved_hybrid_snapshot_always_derives_hybrid(saved in ".{0,40}", ai in proptest::option::of(".{0,40}")) {
        let derived = derive_plan_type(&saved, &saved, Some(PlanType::Hybrid), ai.as_deref());
        prop_assert_eq!(derived, PlanType::Hybrid);
    }

    #[test]
    fn ai_lineage_with_diverged_text_is_hybrid(text in ".{1,40}", ai in ".{1,40}") {
        prop_assume!(text != ai);
        let derived = derive_plan_type(&text, "", None, Some(&ai));
        prop_assert_eq!(derived, PlanType::Hybrid);
    }

    #[test]
    fn reset_is_idempotent(text in ".{0,80}") {
        let mut state = PlanState::new();
        state.set_active_note(3);
        state.update_text(text);
        state.reset();
        let once = (
            state.text.clone(),
            state.plan_type,
            state.is_modified(),
            state.active_note_id,
        );
        state.reset();
        let twice = (
            state.text.clone(),
            state.plan_type,
            state.is_modified(),
            state.active_note_id,
        );
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn length_limit_is_exact(len in 4990usize..5010) {
        let mut state = PlanState::new();
        state.update_text("x".repeat(len));
        prop_assert_eq!(state.text_too_long(), len > MAX_PLAN_TEXT_CHARS);
    }

    // ------------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------------

    #[test]
    fn loaded_count_never_exceeds_total(total in 0i64..60, page_size in 1i64..10) {
        let mut state = NotesState::new(page_size);
        let mut token = state.begin_initial_load();
        let mut offset = 0i64;
        loop {
            let upper = (offset + page_size).min(total);
            state.apply_page(token, offset, Ok(page(offset..upper, total)));
            prop_assert!(state.offset <= state.total || state.total == 0);
            prop_assert_eq!(state.has_more, state.offset < state.total);
            prop_assert_eq!(state.all_loaded, !state.has_more && state.total > 0);
            match state.begin_load_more() {
                Some((t, o)) => {
                    token = t;
                    offset = o;
                }
                None => break,
            }
        }
        prop_assert_eq!(state.notes.len() as i64, total);
        prop_assert!(!state.has_more);
    }

    #[test]
    fn stale_pages_never_apply(first in 0i64..30, second in 0i64..30) {
        let mut state = NotesState::new(10);
        let stale = state.begin_search("old".to_string());
        let fresh = state.begin_search("new".to_string());

        prop_assert!(state.apply_page(fresh, 0, Ok(page(0..second, second))));
        prop_assert!(!state.apply_page(stale, 0, Ok(page(100..100 + first, first))));
        prop_assert_eq!(state.notes.len() as i64, second);
        prop_assert_eq!(state.search_query.as_str(), "new");
    }

    // ------------------------------------------------------------------------
    // Debounce
    // ------------------------------------------------------------------------

    #[test]
    fn draft_commits_only_after_quiet_delay(
        delay_ms in 50u64..1000,
        elapsed_ms in 0u64..2000,
        query in "[a-z]{2,10}",
    ) {
        let delay = Duration::from_millis(delay_ms);
        let mut input = DebouncedInput::new(delay, 2);
        let t0 = Instant::now();
        for c in query.chars() {
            input.push_char(t0, c);
        }
        let committed = input.poll(t0 + Duration::from_millis(elapsed_ms));
        if elapsed_ms >= delay_ms {
            prop_assert_eq!(committed, Some(query));
        } else {
            prop_assert_eq!(committed, None);
        }
    }

    #[test]
    fn short_nonempty_drafts_never_commit(min_chars in 2usize..6, query in "[a-z]{1,5}") {
        prop_assume!(!query.is_empty() && query.chars().count() < min_chars);
        let mut input = DebouncedInput::new(Duration::from_millis(100), min_chars);
        let t0 = Instant::now();
        for c in query.chars() {
            input.push_char(t0, c);
        }
        prop_assert_eq!(input.poll(t0 + Duration::from_secs(10)), None);
        prop_assert_eq!(input.committed(), "");
    }

    // ------------------------------------------------------------------------
    // Route guards
    // ------------------------------------------------------------------------

    #[test]
    fn guards_are_total_and_consistent(id in 1i64..1000, has_session in any::<bool>()) {
        for route in [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Profile,
            Route::NoteList,
            Route::NoteCreate,
            Route::NoteDetail(id),
            Route::NoteEdit(id),
            Route::NotFound,
        ] {
            match resolve(route, has_session) {
                Guarded::Allow(landed) => prop_assert_eq!(landed, route),
                Guarded::RedirectToLogin { return_to } => {
                    prop_assert!(!has_session);
                    prop_assert!(route.requires_auth());
                    prop_assert_eq!(return_to, route);
                }
                Guarded::RedirectToNotes => {
                    prop_assert!(has_session);
                    prop_assert!(route.is_guest_only());
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Keybindings
    // ------------------------------------------------------------------------

    #[test]
    fn plain_letters_map_consistently(c in proptest::char::range('a', 'z')) {
        let event = KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        let expected = match c {
            'q' => Some(Action::Quit),
            'n' => Some(Action::NewItem),
            'e' => Some(Action::EditItem),
            'd' => Some(Action::DeleteItem),
            'g' => Some(Action::GeneratePlan),
            's' => Some(Action::SavePlan),
            'u' => Some(Action::DiscardPlan),
            'i' => Some(Action::EditPlan),
            'p' => Some(Action::OpenProfile),
            'r' => Some(Action::Refresh),
            'k' => Some(Action::MoveUp),
            'j' => Some(Action::MoveDown),
            _ => None,
        };
        prop_assert_eq!(map_key(event), expected);
    }

    // ------------------------------------------------------------------------
    // Config validation
    // ------------------------------------------------------------------------

    #[test]
    fn positive_knobs_validate(
        timeout in 1u64..120_000,
        page_size in 1i64..500,
        debounce in 1u64..5_000,
        min_chars in 1usize..10,
    ) {
        let mut config = base_config();
        config.request_timeout_ms = timeout;
        config.page_size = page_size;
        config.search = SearchConfig {
            debounce_ms: debounce,
            min_chars,
        };
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn zeroed_knobs_are_rejected(which in 0usize..4) {
        let mut config = base_config();
        match which {
            0 => config.request_timeout_ms = 0,
            1 => config.page_size = 0,
            2 => config.search.debounce_ms = 0,
            _ => config.search.min_chars = 0,
        }
        prop_assert!(config.validate().is_err());
    }
}
