//! This crate contains the shared client state layer for the workspace.

mod platform;
pub use platform::{platform_session_store, PlatformStore};

mod auth;
pub use auth::{use_api, use_auth, AuthProvider, AuthState, LogoutButton};

pub mod posts;
pub use posts::use_posts_feed;

pub mod guard;
pub use guard::{GuardOutcome, RouteMeta};
