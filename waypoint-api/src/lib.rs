//! Waypoint API contract
//!
//! Request/response schemas for every REST endpoint the client consumes,
//! plus the backend's error envelope. The backend contract is treated as
//! opaque: this crate only describes shapes, never behavior.

pub mod error;
pub mod types;
