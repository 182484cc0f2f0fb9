//! # SessionStore — abstract session persistence
//!
//! [`SessionStore`] is the key-value capability that keeps the user's
//! [`SessionRecord`] across restarts. It is a deliberately small async
//! interface — load, save, clear — so the same auth logic works against the
//! browser's localStorage, a file on disk, or an in-memory map in tests.
//!
//! Implementations live in sibling modules:
//!
//! | Impl | Platform | Backing |
//! |------|----------|---------|
//! | [`crate::MemoryStore`] | tests / fallback | `Arc<Mutex<Option<…>>>` |
//! | [`crate::FileStore`] | desktop | JSON file under the platform data dir |
//! | `LocalStorageStore` | web (`web` feature) | browser `localStorage` |
//!
//! ## Error policy
//!
//! All methods are infallible from the caller's point of view: a broken or
//! unavailable backend degrades to "no stored session" on reads and to a
//! silently dropped write. The client then simply behaves as logged out; the
//! authoritative session always lives with the server.

use crate::models::SessionRecord;

/// Async interface for persisting the single session record.
pub trait SessionStore {
    /// Read the stored record, if any. Absence means logged out.
    fn load(&self) -> impl std::future::Future<Output = Option<SessionRecord>>;

    /// Persist the record, replacing whatever was stored before.
    fn save(
        &self,
        record: &SessionRecord,
    ) -> impl std::future::Future<Output = ()>;

    /// Remove the stored record.
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}
