//! Event types for the TUI event loop.

use crate::errors::AppError;
use crate::state::notes::FetchToken;
use crossterm::event::KeyEvent;
use waypoint_api::types::{
    GeneratePlanResponse, ListNotesResponse, NoteResponse, PlanResponse, TokenResponse,
    UserResponse,
};
use waypoint_core::NoteId;

#[derive(Debug)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    Api(ApiEvent),
}

/// Completion of a spawned API call. List pages carry the token of the
/// request that produced them so stale responses can be dropped.
#[derive(Debug)]
pub enum ApiEvent {
    LoginFinished(Result<TokenResponse, AppError>),
    RegisterFinished(Result<UserResponse, AppError>),
    ProfileLoaded(Result<UserResponse, AppError>),
    NotesPage {
        token: FetchToken,
        request_offset: i64,
        result: Result<ListNotesResponse, AppError>,
    },
    NoteLoaded(Result<NoteResponse, AppError>),
    NoteCreated(Result<NoteResponse, AppError>),
    NoteUpdated(Result<NoteResponse, AppError>),
    NoteDeleted {
        note_id: NoteId,
        result: Result<(), AppError>,
    },
    PlanLoaded {
        note_id: NoteId,
        result: Result<Option<PlanResponse>, AppError>,
    },
    PlanGenerated {
        note_id: NoteId,
        result: Result<GeneratePlanResponse, AppError>,
    },
    PlanSaved {
        note_id: NoteId,
        result: Result<PlanResponse, AppError>,
    },
}
