//! Authentication context and hooks for the UI.

use api::{ApiClient, ApiConfig, Auth, SessionRecord};
use dioxus::prelude::*;

use crate::platform::{platform_session_store, PlatformStore};

/// Authentication state for the application.
///
/// Being logged in is derived from the presence of a session record; there
/// is no independently settable flag to drift out of sync.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<SessionRecord>,
    /// Whether the initial load from persistent storage is still running.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_name.as_str())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared auth controller (and, via `client()`, the HTTP adapter).
pub fn use_api() -> Auth<PlatformStore> {
    use_context::<Auth<PlatformStore>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    let auth = use_context_provider(|| {
        let client = ApiClient::new(ApiConfig::from_env(), platform_session_store())
            .expect("failed to build API client");
        Auth::new(client)
    });

    // Seed in-memory state from the persistent store on mount; whatever is
    // stored becomes truth until the server says otherwise.
    let _ = use_resource(move || {
        let auth = auth.clone();
        async move {
            let session = auth.current().await;
            if session.is_some() {
                tracing::debug!("restored session from storage");
            }
            auth_state.set(AuthState {
                session,
                loading: false,
            });
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that drops the session and returns to the home route.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let auth = use_api();
    let nav = use_navigator();

    let onclick = move |_| {
        let auth = auth.clone();
        async move {
            auth.logout().await;
            auth_state.set(AuthState {
                session: None,
                loading: false,
            });
            nav.push("/");
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
