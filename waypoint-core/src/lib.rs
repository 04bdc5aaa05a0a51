//! Waypoint Core - Entity Types
//!
//! Pure data structures with no behavior. All other crates depend on this.
//! This crate contains ONLY data types - no business logic.

mod entities;
mod enums;
mod identity;
mod limits;

pub use entities::{Note, Plan, User};
pub use enums::{PlanType, PlanTypeParseError};
pub use identity::{GenerationId, NoteId, PlanId, Timestamp, TripDate, UserId};
pub use limits::{
    plan_text_too_long, MAX_KEY_IDEAS_CHARS, MAX_PEOPLE, MAX_PLAN_TEXT_CHARS, MAX_TITLE_CHARS,
    MIN_PEOPLE,
};
