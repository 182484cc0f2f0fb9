//! # ApiError — the single tagged failure shape
//!
//! Every operation in this crate fails with an [`ApiError`]: a kind plus a
//! human-readable message. The kinds follow the failure taxonomy of the
//! client:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | [`ErrorKind::Session`] | Local precondition failure (e.g. profile update with no active session). Never reaches the network. |
//! | [`ErrorKind::Server`] | The server answered with `success: false`; the message is server-supplied. |
//! | [`ErrorKind::Transport`] | Network error, non-2xx status, or malformed body. |
//!
//! No raw transport error escapes to callers, and no operation retries:
//! each failure is surfaced once and terminates the action.

use thiserror::Error;

/// Which stage of an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local precondition failure; no request was issued.
    Session,
    /// Server-reported logical failure (`success: false`).
    Server,
    /// Network failure, non-2xx response, or malformed body.
    Transport,
}

/// Tagged failure returned by every client operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn session(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Session,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Server,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(format!("request failed: {err}"))
    }
}
