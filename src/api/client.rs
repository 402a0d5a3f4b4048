//! HTTP client for the flashcards service.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;

/// Client for the remote flashcards API.
///
/// Wraps a [`reqwest::Client`] configured with a cookie store, so the
/// session credential set by `POST /auth/login` rides along on every
/// subsequent call. The client itself is stateless beyond that: one
/// method per verb/path combination, no retries, no timeouts.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let http = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(resp).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(resp).await
    }

    pub(crate) async fn post_ok<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::ensure_ok(resp).await
    }

    pub(crate) async fn put_ok<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        Self::ensure_ok(resp).await
    }

    pub(crate) async fn delete_ok<Q>(&self, path: &str, query: &Q) -> Result<(), ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let resp = self.http.delete(self.url(path)).query(query).send().await?;
        Self::ensure_ok(resp).await
    }

    /// Decode a successful response body, or classify the failure.
    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            serde_json::from_str(&body)
                .map_err(|err| ApiError::Unexpected(format!("malformed response body: {err}")))
        } else {
            Err(ApiError::from_error_body(status, &body))
        }
    }

    /// Like [`Self::decode`] for calls whose response body is ignored.
    async fn ensure_ok(resp: Response) -> Result<(), ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await?;
        Err(ApiError::from_error_body(status, &body))
    }
}
