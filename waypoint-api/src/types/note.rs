//! Note-related API types

use serde::{Deserialize, Serialize};
use waypoint_core::{Note, TripDate};

/// Request to create a new note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteCreateRequest {
    pub title: String,
    pub place: String,
    pub date_from: TripDate,
    pub date_to: TripDate,
    pub number_of_people: i32,
    pub key_ideas: Option<String>,
}

/// Request to update an existing note. The edit form submits the full
/// record, so every field is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteUpdateRequest {
    pub title: String,
    pub place: String,
    pub date_from: TripDate,
    pub date_to: TripDate,
    pub number_of_people: i32,
    pub key_ideas: Option<String>,
}

/// Query parameters for `GET /notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNotesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_title: Option<String>,
}

/// Response containing one page of notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNotesResponse {
    pub notes: Vec<NoteResponse>,
    /// Total count (before pagination)
    pub total: i64,
}

/// Note responses deserialize directly into the core entity.
pub type NoteResponse = Note;
