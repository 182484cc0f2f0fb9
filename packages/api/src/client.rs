//! # ApiClient — authenticated HTTP adapter
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] together with the base URL and
//! an injected [`SessionStore`]. The store is a capability handed in at
//! construction, not ambient global state, and it is read fresh on every
//! outgoing request: whenever a stored session carries a token, the request
//! gets an `Authorization: Bearer <token>` header. A logout is therefore
//! honored by the very next request anywhere in the process.
//!
//! Responses are decoded as the [`Envelope`] wrapper. A non-2xx status is a
//! transport failure, but if the server shipped an envelope with a message
//! anyway (the API does this for handled errors), that message is surfaced
//! instead of a generic one.

use serde::de::DeserializeOwned;
use serde_json::Value;
use store::SessionStore;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::Envelope;

/// HTTP adapter bound to a base URL and a session capability.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    sessions: S,
}

impl<S: SessionStore> ApiClient<S> {
    /// Build a client from config and a session store.
    pub fn new(config: ApiConfig, sessions: S) -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        // reqwest's wasm backend exposes no client-level timeout.
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Ok(Self {
            http,
            base_url: config.base_url,
            sessions,
        })
    }

    /// The session capability this client authenticates with.
    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(self.http.get(self.url(path))).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<Envelope<T>, ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<Envelope<T>, ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(self.http.delete(self.url(path))).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        // Read the store on every request, never a cached token.
        let request = match self.sessions.load().await {
            Some(record) if record.has_token() => request.bearer_auth(record.token),
            _ => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Envelope<Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            tracing::warn!(%status, "request rejected: {message}");
            return Err(ApiError::transport(message));
        }

        Ok(response.json::<Envelope<T>>().await?)
    }
}
