//! # localStorage session store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the web platform. It
//! keeps the serialized [`SessionRecord`] under a single well-known key in
//! the browser's `localStorage`, so a page reload finds the session exactly
//! as the last auth action left it.
//!
//! All methods silently swallow storage failures (a blocked or unavailable
//! localStorage reads as "logged out" and drops writes). This keeps the UI
//! resilient; the server remains the authority on whether the token is
//! actually valid.

use crate::models::SessionRecord;
use crate::session::SessionStore;

const DEFAULT_KEY: &str = "murmur.session";

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    /// Create a store using the default `"murmur.session"` key.
    pub fn new() -> Self {
        Self::with_key(DEFAULT_KEY)
    }

    /// Create a store scoped to a custom storage key.
    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageStore {
    async fn load(&self) -> Option<SessionRecord> {
        let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    async fn save(&self, record: &SessionRecord) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(record) {
            let _ = storage.set_item(&self.key, &raw);
        }
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
