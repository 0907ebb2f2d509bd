// HTTP client wrapper for the Cliniq backend API

use std::sync::Arc;

use cliniq_contracts::ApiEnvelope;
use cliniq_core::SessionStore;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found")]
    NotFound,

    #[error("Unauthorized")]
    Unauthorized,
}

/// Fired when the backend rejects the bearer token. By the time this runs
/// the session store has already been cleared; the host decides what a
/// "redirect to login" means for it.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self);
}

/// A configured request layer: attaches the bearer token (read from the
/// session store at call time, so a fresh login is picked up on the next
/// request) and decodes the `{success, message, data}` envelope.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn SessionStore>,
    on_unauthorized: Option<Arc<dyn UnauthorizedHandler>>,
}

impl ApiClient {
    pub fn new(base_url: &str, store: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            store,
            on_unauthorized: None,
        }
    }

    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.authorize(self.http.get(&url)).send().await?;
        self.handle_response(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.authorize(self.http.post(&url)).json(body).send().await?;
        self.handle_response(response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "PUT");
        let response = self.authorize(self.http.put(&url)).json(body).send().await?;
        self.handle_response(response).await
    }

    /// DELETE endpoints acknowledge with an envelope whose `data` may be
    /// absent; only `success` matters.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "DELETE");
        let response = self.authorize(self.http.delete(&url)).send().await?;
        let response = self.check_status(response).await?;
        let status = response.status();

        let envelope: ApiEnvelope<serde_json::Value> = response.json().await?;
        if !envelope.success {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "Request failed".to_string()),
            });
        }
        Ok(())
    }

    /// Bearer token sourced at call time, not cached at construction.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.load() {
            Some(session) => request.bearer_auth(session.token),
            None => request,
        }
    }

    /// Maps 401 to a forced logout (clear store, fire the handler), 404 to
    /// `NotFound`, and other failures to `Api` with the envelope message
    /// when one parses out of the body.
    async fn check_status(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.store.clear() {
                warn!(error = %err, "failed to clear session after 401");
            }
            if let Some(handler) = &self.on_unauthorized {
                handler.on_unauthorized();
            }
            return Err(ClientError::Unauthorized);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = self.check_status(response).await?;
        let status = response.status();

        let envelope: ApiEnvelope<T> = response.json().await?;
        if !envelope.success {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "Request failed".to_string()),
            });
        }

        envelope.data.ok_or(ClientError::Api {
            status: status.as_u16(),
            message: "Response envelope is missing data".to_string(),
        })
    }
}
