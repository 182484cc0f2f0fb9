//! # Auth — session lifecycle controller
//!
//! [`Auth`] owns the authenticated session. There is no stored
//! "is authenticated" flag anywhere: being logged in is *derived* from the
//! presence of a [`SessionRecord`] in the session store, so the flag can
//! never drift from the record.
//!
//! ## Contract
//!
//! - [`register`](Auth::register) / [`login`](Auth::login) — on envelope
//!   success, the returned record (token included) is persisted verbatim and
//!   handed back; on failure the caller gets the server's message, or a
//!   generic fallback when the transport itself failed. No panic, no raw
//!   error escapes.
//! - [`update_biography`](Auth::update_biography) — requires an active
//!   session with a token and fails locally (no network call) without one.
//!   On success only the `biography` field of the stored record changes;
//!   on any failure the record is left untouched.
//! - [`logout`](Auth::logout) — clears the stored record unconditionally.
//!   Purely local and idempotent; navigation back home is the UI layer's
//!   concern.

use serde_json::json;
use store::{SessionRecord, SessionStore};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Envelope;

const REGISTER_FALLBACK: &str = "Registration failed";
const LOGIN_FALLBACK: &str = "Login failed";
const UPDATE_FALLBACK: &str = "Update failed";

/// Fields the registration endpoint expects.
#[derive(Clone, Debug, Default)]
pub struct RegisterProfile {
    pub phone_number: String,
    pub user_name: String,
    pub password: String,
    pub email: String,
    pub biography: String,
    pub cover_image: Option<String>,
}

/// Session lifecycle controller over an [`ApiClient`].
#[derive(Clone, Debug)]
pub struct Auth<S> {
    client: ApiClient<S>,
}

impl<S: SessionStore> Auth<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<S> {
        &self.client
    }

    /// The stored session, if any. Whatever is stored is taken as truth;
    /// token validity is the server's call on the next request.
    pub async fn current(&self) -> Option<SessionRecord> {
        self.client.sessions().load().await
    }

    /// Create an account and establish its session.
    pub async fn register(&self, profile: RegisterProfile) -> Result<SessionRecord, ApiError> {
        let body = json!({
            "phoneNumber": profile.phone_number,
            "userName": profile.user_name,
            "password": profile.password,
            "email": profile.email,
            "biography": profile.biography,
            "coverImage": profile.cover_image,
        });
        let envelope = self.client.post("/api/user/register", &body).await?;
        self.establish(envelope, REGISTER_FALLBACK).await
    }

    /// Authenticate and establish a session.
    pub async fn login(
        &self,
        phone_number: &str,
        password: &str,
    ) -> Result<SessionRecord, ApiError> {
        let body = json!({
            "phoneNumber": phone_number,
            "password": password,
        });
        let envelope = self.client.post("/api/user/login", &body).await?;
        self.establish(envelope, LOGIN_FALLBACK).await
    }

    /// Update the profile biography. Only the `biography` field of the
    /// stored record is patched; every other field stays as it was.
    pub async fn update_biography(&self, biography: &str) -> Result<(), ApiError> {
        let Some(mut record) = self.current().await.filter(SessionRecord::has_token) else {
            return Err(ApiError::session("No authentication token"));
        };

        let body = json!({ "biography": biography });
        let envelope: Envelope<bool> = self.client.put("/api/user/update", &body).await?;
        if !envelope.success {
            return Err(ApiError::server(
                envelope.message.unwrap_or_else(|| UPDATE_FALLBACK.to_string()),
            ));
        }

        record.biography = Some(biography.to_string());
        self.client.sessions().save(&record).await;
        Ok(())
    }

    /// Drop the session. Safe to call with no session active.
    pub async fn logout(&self) {
        self.client.sessions().clear().await;
        tracing::debug!("session cleared");
    }

    async fn establish(
        &self,
        envelope: Envelope<SessionRecord>,
        fallback: &str,
    ) -> Result<SessionRecord, ApiError> {
        if !envelope.success {
            return Err(ApiError::server(
                envelope.message.unwrap_or_else(|| fallback.to_string()),
            ));
        }
        let record = envelope
            .data
            .ok_or_else(|| ApiError::transport(fallback.to_string()))?;

        self.client.sessions().save(&record).await;
        tracing::debug!(user = %record.user_name, "session established");
        Ok(record)
    }
}
