//! API request/response types

mod auth;
mod note;
mod plan;

pub use auth::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use note::{
    ListNotesRequest, ListNotesResponse, NoteCreateRequest, NoteResponse, NoteUpdateRequest,
};
pub use plan::{GeneratePlanResponse, PlanCreateRequest, PlanResponse, PlanUpdateRequest};
