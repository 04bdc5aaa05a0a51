//! Session state.

use waypoint_api::types::UserResponse;

#[derive(Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserResponse>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn login_succeeded(&mut self, token: String) {
        self.token = Some(token);
        self.is_loading = false;
        self.error = None;
    }

    pub fn profile_loaded(&mut self, user: UserResponse) {
        self.user = Some(user);
        self.is_loading = false;
    }

    pub fn failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Drop all session material. Used for explicit logout and for forced
    /// logout on session expiry.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.is_loading = false;
        self.error = None;
    }
}
