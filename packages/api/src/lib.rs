//! # API crate — REST client and state controllers for Murmur
//!
//! This crate is the client-side backbone of Murmur. It wraps the
//! social-posting REST service behind typed controllers and mirrors server
//! responses into plain state that the UI layer renders from.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — authenticated HTTP adapter over `reqwest`, envelope decoding, bearer injection |
//! | [`auth`] | [`Auth`] — session lifecycle: register, login, profile update, logout |
//! | [`posts`] | [`PostsFeed`] — post list state with create/edit/delete/comment and refresh-after-mutation |
//! | [`config`] | [`ApiConfig`] — base URL and timeout, overridable at build time |
//! | [`error`] | [`ApiError`] — the one tagged error shape every operation returns |
//! | [`models`] | [`Envelope`], [`Post`], [`Comment`] — wire types |
//!
//! ## Endpoints consumed
//!
//! - `POST /api/user/register`, `POST /api/user/login`, `PUT /api/user/update`
//! - `GET /api/post/list`, `POST /api/post/create`, `PUT /api/post/edit`,
//!   `DELETE /api/post/delete/{postId}`
//! - `POST /api/comment/create`
//!
//! Every response uses the `{success, data, message}` envelope. The client
//! never constructs or edits a post locally: every successful mutation is
//! followed by a full list re-fetch, so the displayed list is always a
//! verbatim snapshot of the server's view.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod posts;

pub use auth::{Auth, RegisterProfile};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ErrorKind};
pub use models::{Comment, Envelope, Post};
pub use posts::PostsFeed;

pub use store::SessionRecord;
