//! # Route guard decision logic
//!
//! A pure function of the destination's requirements and the current
//! authentication state, evaluated synchronously before every navigation.
//! No suspension and no network, so it cannot race a pending login.
//!
//! | destination | authenticated | outcome |
//! |-------------|---------------|---------|
//! | requires auth | no | redirect home |
//! | guest only | yes | redirect home |
//! | anything else | any | proceed |
//!
//! The router layer maps each route to a [`RouteMeta`] and applies the
//! [`GuardOutcome`] before rendering protected content.

/// Access requirements of a destination route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Only reachable with an active session.
    pub requires_auth: bool,
    /// Only reachable without one (login, register).
    pub guest_only: bool,
}

impl RouteMeta {
    /// A route anyone may visit.
    pub fn public() -> Self {
        Self::default()
    }

    /// A route gated behind authentication.
    pub fn protected() -> Self {
        Self {
            requires_auth: true,
            guest_only: false,
        }
    }

    /// A route for unauthenticated visitors only.
    pub fn guest() -> Self {
        Self {
            requires_auth: false,
            guest_only: true,
        }
    }
}

/// What the router should do with a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    RedirectHome,
}

/// Decide whether a navigation may proceed.
pub fn evaluate(meta: RouteMeta, is_authenticated: bool) -> GuardOutcome {
    if meta.requires_auth && !is_authenticated {
        GuardOutcome::RedirectHome
    } else if meta.guest_only && is_authenticated {
        GuardOutcome::RedirectHome
    } else {
        GuardOutcome::Proceed
    }
}
