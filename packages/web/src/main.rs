use dioxus::prelude::*;

use ui::{AuthProvider, GuardOutcome, LogoutButton, RouteMeta};
use views::{Home, Login, Posts, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guard)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/posts")]
        Posts {},
        #[route("/profile")]
        Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Access requirements per destination, consulted by [`Guard`] before every
/// navigation.
fn route_meta(route: &Route) -> RouteMeta {
    match route {
        Route::Home {} => RouteMeta::public(),
        Route::Login {} | Route::Register {} => RouteMeta::guest(),
        Route::Posts {} | Route::Profile {} => RouteMeta::protected(),
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Layout that applies the guard table before rendering any destination.
#[component]
fn Guard() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let state = auth();
    // Hold rendering until the stored session has been read, so the guard
    // never decides off a half-seeded state.
    if state.loading {
        return rsx! {};
    }

    match ui::guard::evaluate(route_meta(&route), state.is_authenticated()) {
        GuardOutcome::Proceed => rsx! {
            Navbar {}
            Outlet::<Route> {}
        },
        GuardOutcome::RedirectHome => {
            nav.replace(Route::Home {});
            rsx! {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    let auth = ui::use_auth();
    let state = auth();

    rsx! {
        header {
            class: "navbar",
            Link { class: "brand", to: Route::Home {}, "Murmur" }
            nav {
                if state.is_authenticated() {
                    Link { to: Route::Posts {}, "Posts" }
                    Link { to: Route::Profile {}, "Profile" }
                    LogoutButton { class: "navbar-logout" }
                } else {
                    Link { to: Route::Login {}, "Log in" }
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
