//! # Filesystem-backed session store
//!
//! [`FileStore`] persists the [`SessionRecord`] as a single JSON file so a
//! desktop build stays logged in across restarts. It is the native
//! counterpart of the browser's localStorage-backed store.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.json       # serialized SessionRecord
//! ```
//!
//! Callers obtain a platform-appropriate base via [`dirs::data_dir()`]
//! (e.g. `~/.local/share/murmur/` on Linux); this crate only deals with the
//! directory it is handed.

use std::path::PathBuf;

use crate::models::SessionRecord;
use crate::session::SessionStore;

const SESSION_FILE: &str = "session.json";

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(SESSION_FILE)
    }
}

impl SessionStore for FileStore {
    async fn load(&self) -> Option<SessionRecord> {
        let raw = std::fs::read_to_string(self.session_path()).ok()?;
        serde_json::from_str(&raw).ok()
    }

    async fn save(&self, record: &SessionRecord) {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(raw) = serde_json::to_string(record) {
            let _ = std::fs::write(path, raw);
        }
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.session_path());
    }
}
