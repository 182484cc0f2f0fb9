use dioxus::prelude::*;

use crate::Route;

/// Landing page, reachable by everyone.
#[component]
pub fn Home() -> Element {
    let auth = ui::use_auth();
    let state = auth();

    rsx! {
        div {
            class: "page home",
            h1 { "Murmur" }
            p { "A small place to post and talk." }

            if let Some(name) = state.user_name() {
                p { "Welcome back, {name}." }
                Link { class: "button", to: Route::Posts {}, "Go to posts" }
            } else {
                div {
                    class: "home-actions",
                    Link { class: "button", to: Route::Login {}, "Log in" }
                    Link { class: "button secondary", to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
