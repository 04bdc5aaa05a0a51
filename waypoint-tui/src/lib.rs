//! Waypoint TUI library exports.

pub mod api_client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod errors;
pub mod events;
pub mod keys;
pub mod logging;
pub mod nav;
pub mod notifications;
pub mod persistence;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;
