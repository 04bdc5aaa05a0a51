//! Auth and profile API types

use serde::{Deserialize, Serialize};
use waypoint_core::User;

/// Credentials for `POST /auth/login` (sent form-encoded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Access token issued on successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Request to create a new account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Account profile returned by `GET /users/me` and registration.
/// Deserializes directly into the core entity.
pub type UserResponse = User;
