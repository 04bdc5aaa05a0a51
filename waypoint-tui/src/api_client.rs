//! REST client for the Waypoint backend.
//!
//! Every call funnels failures through the error normalization layer, so
//! callers only ever see [`AppError`].

use crate::config::TuiConfig;
use crate::errors::{self, AppError};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use waypoint_api::types::{
    GeneratePlanResponse, ListNotesRequest, ListNotesResponse, LoginRequest, NoteCreateRequest,
    NoteResponse, NoteUpdateRequest, PlanCreateRequest, PlanResponse, PlanUpdateRequest,
    RegisterRequest, TokenResponse, UserResponse,
};
use waypoint_core::NoteId;

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    // Shared across clones so a login on one handle is visible to tasks
    // holding another.
    token: Arc<Mutex<Option<String>>>,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, AppError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(errors::from_transport)?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: Arc::new(Mutex::new(None)),
        })
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *lock(&self.token) = Some(token.into());
    }

    pub fn clear_token(&self) {
        *lock(&self.token) = None;
    }

    fn bearer(&self) -> Option<String> {
        lock(&self.token).clone()
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    /// Login is the one form-encoded endpoint; the token is stored on the
    /// client on success.
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AppError> {
        let url = format!("{}/auth/login", self.base_url);
        let response = self
            .client
            .post(url)
            .form(request)
            .send()
            .await
            .map_err(errors::from_transport)?;
        let token: TokenResponse = parse_response(response).await?;
        self.set_token(token.access_token.clone());
        Ok(token)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, AppError> {
        self.post_json("/auth/register", request).await
    }

    pub async fn me(&self) -> Result<UserResponse, AppError> {
        self.get_json::<UserResponse, ()>("/users/me", None).await
    }

    // ------------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------------

    pub async fn list_notes(
        &self,
        params: &ListNotesRequest,
    ) -> Result<ListNotesResponse, AppError> {
        self.get_json("/notes", Some(params)).await
    }

    pub async fn create_note(&self, request: &NoteCreateRequest) -> Result<NoteResponse, AppError> {
        self.post_json("/notes", request).await
    }

    pub async fn get_note(&self, note_id: NoteId) -> Result<NoteResponse, AppError> {
        let path = format!("/notes/{}", note_id);
        self.get_json::<NoteResponse, ()>(&path, None).await
    }

    pub async fn update_note(
        &self,
        note_id: NoteId,
        request: &NoteUpdateRequest,
    ) -> Result<NoteResponse, AppError> {
        let path = format!("/notes/{}", note_id);
        self.put_json(&path, request).await
    }

    pub async fn delete_note(&self, note_id: NoteId) -> Result<(), AppError> {
        let url = format!("{}/notes/{}", self.base_url, note_id);
        let mut request = self.client.delete(url);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(errors::from_transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await.map_err(errors::from_transport)?;
        Err(errors::from_response(status.as_u16(), &text))
    }

    // ------------------------------------------------------------------------
    // Plan
    // ------------------------------------------------------------------------

    /// The active plan for a note; `None` when the note has no plan yet.
    pub async fn get_active_plan(&self, note_id: NoteId) -> Result<Option<PlanResponse>, AppError> {
        let path = format!("/notes/{}/plan", note_id);
        optional(self.get_json::<PlanResponse, ()>(&path, None).await)
    }

    pub async fn generate_plan(&self, note_id: NoteId) -> Result<GeneratePlanResponse, AppError> {
        let path = format!("/notes/{}/plan/generate", note_id);
        self.post_json(&path, &serde_json::json!({})).await
    }

    pub async fn create_plan(
        &self,
        note_id: NoteId,
        request: &PlanCreateRequest,
    ) -> Result<PlanResponse, AppError> {
        let path = format!("/notes/{}/plan", note_id);
        self.post_json(&path, request).await
    }

    pub async fn update_plan(
        &self,
        note_id: NoteId,
        request: &PlanUpdateRequest,
    ) -> Result<PlanResponse, AppError> {
        let path = format!("/notes/{}/plan", note_id);
        self.put_json(&path, request).await
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(url);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = request.send().await.map_err(errors::from_transport)?;
        parse_response(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(url);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }
        let response = request
            .json(body)
            .send()
            .await
            .map_err(errors::from_transport)?;
        parse_response(response).await
    }

    async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.put(url);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }
        let response = request
            .json(body)
            .send()
            .await
            .map_err(errors::from_transport)?;
        parse_response(response).await
    }
}

/// Tolerate 404 as an absent value; everything else passes through.
pub fn optional<T>(result: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    if status.is_success() {
        response.json::<T>().await.map_err(errors::from_transport)
    } else {
        let text = response.text().await.map_err(errors::from_transport)?;
        Err(errors::from_response(status.as_u16(), &text))
    }
}

fn lock<'a>(token: &'a Arc<Mutex<Option<String>>>) -> std::sync::MutexGuard<'a, Option<String>> {
    token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_maps_not_found_to_none() {
        let err: Result<(), AppError> = Err(AppError::NotFound {
            user_message: "missing".to_string(),
        });
        assert!(matches!(optional(err), Ok(None)));
    }

    #[test]
    fn optional_passes_other_errors_through() {
        let err: Result<(), AppError> = Err(AppError::Server {
            status: 500,
            user_message: "down".to_string(),
        });
        assert!(optional(err).is_err());
    }

    #[test]
    fn optional_wraps_success() {
        let ok: Result<i32, AppError> = Ok(7);
        assert!(matches!(optional(ok), Ok(Some(7))));
    }
}
