//! Auth endpoints: `/auth/login`, `/auth/me`.
//!
//! Login establishes the session cookie the rest of the API relies on.

use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::domain::Profile;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "rememberMe")]
    pub remember_me: bool,
}

impl ApiClient {
    /// `POST /auth/login` — authenticate and receive the session cookie.
    pub async fn login(&self, request: &LoginRequest) -> Result<Profile, ApiError> {
        self.post_json("/auth/login", request).await
    }

    /// `POST /auth/me` — the profile behind the current session.
    pub async fn me(&self) -> Result<Profile, ApiError> {
        self.post_json("/auth/me", &serde_json::json!({})).await
    }

    /// `DELETE /auth/me` — drop the session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.delete_ok("/auth/me", &[] as &[(&str, &str)]).await
    }
}
