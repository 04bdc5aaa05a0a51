//! Identity types for Waypoint entities

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Note identifier issued by the backend. Numeric, not a UUID.
pub type NoteId = i64;

/// Plan identifier issued by the backend.
pub type PlanId = i64;

/// User account identifier issued by the backend.
pub type UserId = i64;

/// Opaque correlation token tying a plan text to one AI generation call.
pub type GenerationId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Calendar date for trip boundaries (no time component on the wire).
pub type TripDate = NaiveDate;
