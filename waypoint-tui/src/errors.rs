//! Error normalization layer.
//!
//! Converts transport failures and backend error envelopes into a closed set
//! of typed errors, each carrying a stable machine code, an HTTP-like status,
//! and a user-safe message. Classification order: transport failure first,
//! then envelope dispatch by status, then the unknown fallback.

use waypoint_api::error::{detail, ApiErrorBody, ErrorDetail};

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{user_message}")]
    Network {
        user_message: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{user_message}")]
    BadRequest { user_message: String, detail: String },
    #[error("{user_message}")]
    Authentication { status: u16, user_message: String },
    #[error("{user_message}")]
    NotFound { user_message: String },
    #[error("{user_message}")]
    Conflict { user_message: String, detail: String },
    #[error("{0}")]
    Validation(ValidationError),
    #[error("{user_message}")]
    Server { status: u16, user_message: String },
    #[error("{user_message}")]
    UnknownApi { status: u16, user_message: String },
    #[error("{user_message}")]
    Unknown { user_message: String, detail: String },
}

/// 422 response: individual field violations grouped by dotted field path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{user_message}")]
pub struct ValidationError {
    pub user_message: String,
    /// (field path, message) pairs in the order the server sent them.
    violations: Vec<(String, String)>,
}

impl ValidationError {
    pub fn new(violations: Vec<(String, String)>) -> Self {
        Self {
            user_message: "Some fields contain invalid values.".to_string(),
            violations,
        }
    }

    /// Messages for one field path, in order received.
    pub fn field_errors(&self, path: &str) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|(field, _)| field == path)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    /// Every field path with at least one violation, first-seen order,
    /// each path exactly once.
    pub fn field_names_in_error(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (field, _) in &self.violations {
            if !names.iter().any(|name| name == field) {
                names.push(field);
            }
        }
        names
    }

    pub fn all_violations(&self) -> &[(String, String)] {
        &self.violations
    }
}

impl AppError {
    /// Stable machine code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Network { .. } => "NETWORK_ERROR",
            AppError::BadRequest { .. } => "BAD_REQUEST_ERROR",
            AppError::Authentication { .. } => "AUTHENTICATION_ERROR",
            AppError::NotFound { .. } => "NOT_FOUND_ERROR",
            AppError::Conflict { .. } => "CONFLICT_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Server { .. } => "SERVER_ERROR",
            AppError::UnknownApi { .. } | AppError::Unknown { .. } => "UNKNOWN_ERROR",
        }
    }

    /// HTTP-like status. Errors without an HTTP response report 0.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Network { .. } | AppError::Unknown { .. } => 0,
            AppError::BadRequest { .. } => 400,
            AppError::Authentication { status, .. } => *status,
            AppError::NotFound { .. } => 404,
            AppError::Conflict { .. } => 409,
            AppError::Validation(_) => 422,
            AppError::Server { status, .. } => *status,
            AppError::UnknownApi { status, .. } => *status,
        }
    }

    /// Concise, non-technical sentence safe to show to the user.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Network { user_message, .. }
            | AppError::BadRequest { user_message, .. }
            | AppError::Authentication { user_message, .. }
            | AppError::NotFound { user_message }
            | AppError::Conflict { user_message, .. }
            | AppError::Server { user_message, .. }
            | AppError::UnknownApi { user_message, .. }
            | AppError::Unknown { user_message, .. } => user_message,
            AppError::Validation(v) => &v.user_message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::Authentication { .. })
    }
}

/// Transport-level failure: the request never produced an HTTP response the
/// client could interpret.
pub fn from_transport(source: reqwest::Error) -> AppError {
    AppError::Network {
        user_message: "Unable to reach the server. Please check your connection.".to_string(),
        source,
    }
}

/// Classify a non-2xx response body.
pub fn from_response(status: u16, body: &str) -> AppError {
    let Ok(envelope) = serde_json::from_str::<ApiErrorBody>(body) else {
        return AppError::Unknown {
            user_message: "An unexpected error occurred.".to_string(),
            detail: body.to_string(),
        };
    };

    match status {
        400 => bad_request(envelope),
        401 => AppError::Authentication {
            status,
            user_message: SESSION_EXPIRED_MESSAGE.to_string(),
        },
        403 => AppError::Authentication {
            status,
            user_message: "You do not have permission to perform this action.".to_string(),
        },
        404 => AppError::NotFound {
            user_message: "The requested item could not be found.".to_string(),
        },
        409 => conflict(envelope),
        422 => validation(envelope),
        500.. => AppError::Server {
            status,
            user_message: "Something went wrong on our side. Please try again later.".to_string(),
        },
        _ => AppError::UnknownApi {
            status,
            user_message: "An unexpected error occurred.".to_string(),
        },
    }
}

fn detail_message(envelope: &ApiErrorBody) -> String {
    match &envelope.detail {
        ErrorDetail::Message(message) => message.clone(),
        ErrorDetail::Violations(violations) => violations
            .iter()
            .map(|v| v.msg.as_str())
            .collect::<Vec<_>>()
            .join("; "),
    }
}

fn bad_request(envelope: ApiErrorBody) -> AppError {
    let message = detail_message(&envelope);
    let user_message = match message.as_str() {
        detail::BAD_CREDENTIALS => "Incorrect email or password.".to_string(),
        detail::USER_ALREADY_EXISTS => "An account with this email already exists.".to_string(),
        _ => "The request could not be processed. Please review your input.".to_string(),
    };
    AppError::BadRequest {
        user_message,
        detail: message,
    }
}

fn conflict(envelope: ApiErrorBody) -> AppError {
    let message = detail_message(&envelope);
    let user_message = match message.as_str() {
        detail::NOTE_ALREADY_EXISTS => "A note with this title already exists.".to_string(),
        _ => "This change conflicts with existing data.".to_string(),
    };
    AppError::Conflict {
        user_message,
        detail: message,
    }
}

fn validation(envelope: ApiErrorBody) -> AppError {
    let violations = match envelope.detail {
        ErrorDetail::Violations(violations) => violations
            .iter()
            .map(|v| (v.field_path(), v.msg.clone()))
            .collect(),
        ErrorDetail::Message(message) => vec![(String::new(), message)],
    };
    AppError::Validation(ValidationError::new(violations))
}
