//! Notification system for the TUI.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}
