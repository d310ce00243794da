//! HTTP template store client
//!
//! JSON REST client for the remote template store. The wire format is the
//! store's; this client only serializes the typed model and maps response
//! statuses onto the template error taxonomy. No retry or backoff — any
//! timeout policy belongs to the injected `reqwest` client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

use crate::error::{TemplateError, TemplateResult};
use crate::models::{MetaPatch, PatchedMeta, SaveTemplate, TemplateMeta, TemplateRecord};

use super::TemplateBackend;

/// Remote template store client
///
/// Endpoints: `GET /templates`, `GET /templates/{id}`, `POST /templates`,
/// `PATCH /templates/{id}`, `DELETE /templates/{id}`,
/// `POST /templates/{id}/duplicate`, `POST /templates/{id}/send-test`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    /// Creates a client for the store at the given base URL
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> TemplateResult<Self> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TemplateError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    /// Sets a bearer token attached to every request
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replaces the underlying HTTP client (timeouts, proxies)
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Joins a path onto the base URL
    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    /// Sends a request with authorization applied
    async fn send(&self, request: RequestBuilder) -> TemplateResult<Response> {
        let request = match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        };
        request
            .send()
            .await
            .map_err(|e| TemplateError::Transport(e.to_string()))
    }

    /// Passes through successful responses, maps the rest onto the taxonomy
    ///
    /// `missing_id` is the id a 404 refers to, when the request targeted one.
    async fn check(response: Response, missing_id: Option<Uuid>) -> TemplateResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(map_status(status, missing_id, &body))
    }
}

/// Maps a non-success HTTP status onto [`TemplateError`]
fn map_status(status: StatusCode, missing_id: Option<Uuid>, body: &str) -> TemplateError {
    match (status, missing_id) {
        (StatusCode::NOT_FOUND, Some(id)) => TemplateError::NotFound(id),
        (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, _) => {
            let reason = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("rejected").to_string()
            } else {
                body.trim().to_string()
            };
            TemplateError::validation("request", reason)
        }
        _ => TemplateError::Transport(format!(
            "HTTP {} - {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        )),
    }
}

/// Decodes a JSON response body
async fn decode<T: DeserializeOwned>(response: Response) -> TemplateResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| TemplateError::Transport(format!("failed to decode response: {e}")))
}

#[async_trait]
impl TemplateBackend for HttpBackend {
    async fn list(&self) -> TemplateResult<Vec<TemplateMeta>> {
        let response = self.send(self.client.get(self.url("templates"))).await?;
        let response = Self::check(response, None).await?;
        decode(response).await
    }

    async fn get(&self, id: Uuid) -> TemplateResult<TemplateRecord> {
        let response = self
            .send(self.client.get(self.url(&format!("templates/{id}"))))
            .await?;
        let response = Self::check(response, Some(id)).await?;
        decode(response).await
    }

    async fn save(&self, input: SaveTemplate) -> TemplateResult<TemplateRecord> {
        let target = input.id;
        let response = self
            .send(self.client.post(self.url("templates")).json(&input))
            .await?;
        let response = Self::check(response, target).await?;
        decode(response).await
    }

    async fn update_meta(&self, patch: MetaPatch) -> TemplateResult<Option<PatchedMeta>> {
        let response = self
            .send(
                self.client
                    .patch(self.url(&format!("templates/{}", patch.id)))
                    .json(&patch),
            )
            .await?;
        // Nothing matched: a no-op for the caller, not a failure
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response, None).await?;
        Ok(Some(decode(response).await?))
    }

    async fn remove(&self, id: Uuid) -> TemplateResult<()> {
        let response = self
            .send(self.client.delete(self.url(&format!("templates/{id}"))))
            .await?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }

    async fn duplicate(&self, id: Uuid) -> TemplateResult<TemplateRecord> {
        let response = self
            .send(
                self.client
                    .post(self.url(&format!("templates/{id}/duplicate"))),
            )
            .await?;
        let response = Self::check(response, Some(id)).await?;
        decode(response).await
    }

    async fn send_test(&self, id: Uuid, email: &str) -> TemplateResult<()> {
        let response = self
            .send(
                self.client
                    .post(self.url(&format!("templates/{id}/send-test")))
                    .json(&json!({ "email": email })),
            )
            .await?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }

    fn backend_id(&self) -> &'static str {
        "http"
    }
}
