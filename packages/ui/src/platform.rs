//! Shared session-store constructor for all platforms.
//!
//! Returns the [`store::SessionStore`] appropriate for the build target:
//! - **Web** (WASM + `web` feature): browser localStorage via
//!   [`store::LocalStorageStore`]
//! - **Desktop** (native): JSON file under the platform data dir via
//!   [`store::FileStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate session store.
pub fn platform_session_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("murmur");
        store::FileStore::new(base)
    }
}
