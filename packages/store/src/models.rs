//! # Session record
//!
//! [`SessionRecord`] is the serialized payload the server returns on login or
//! register: the bearer token plus the profile fields of the authenticated
//! user. The client treats it as the single source of truth for "who is
//! logged in" — a record exists iff a user is authenticated.
//!
//! The record is persisted verbatim through a [`crate::SessionStore`] after
//! every successful auth action, so the in-memory copy and the stored copy
//! never diverge. Fields the server adds that this client does not model are
//! preserved in [`SessionRecord::extra`] via `#[serde(flatten)]`, which keeps
//! the stored record a faithful round trip of whatever the server sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated user's session payload, as returned by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Bearer credential attached to authenticated requests.
    pub token: String,
    /// Token scheme, `"Bearer"` in practice.
    #[serde(rename = "type", default)]
    pub token_type: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    /// Any additional fields the server included, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    /// Whether this record carries a usable bearer token.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}
