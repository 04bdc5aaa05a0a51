//! Core entity structures

use crate::{GenerationId, NoteId, PlanId, PlanType, Timestamp, TripDate, UserId};
use serde::{Deserialize, Serialize};

/// Note - a user-authored record describing a prospective trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub owner_id: UserId,
    pub title: String,
    pub place: String,
    pub date_from: TripDate,
    pub date_to: TripDate,
    pub number_of_people: i32,
    pub key_ideas: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Plan - the itinerary text attached to a note.
/// At most one active plan exists per note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub note_id: NoteId,
    pub plan_text: String,
    pub plan_type: PlanType,
    pub generation_id: Option<GenerationId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub created_at: Timestamp,
}
