//! Registration page.

use api::RegisterProfile;
use dioxus::prelude::*;
use ui::AuthState;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let mut auth_state = ui::use_auth();
    let auth = ui::use_api();
    let nav = use_navigator();
    let mut phone = use_signal(String::new);
    let mut user_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut biography = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);

            let p = phone().trim().to_string();
            let n = user_name().trim().to_string();
            let pw = password();
            let e = email().trim().to_string();

            if p.is_empty() {
                error.set(Some("Phone number is required".to_string()));
                return;
            }
            if n.is_empty() {
                error.set(Some("User name is required".to_string()));
                return;
            }
            if pw.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }

            loading.set(true);
            let profile = RegisterProfile {
                phone_number: p,
                user_name: n,
                password: pw,
                email: e,
                biography: biography(),
                cover_image: None,
            };
            match auth.register(profile).await {
                Ok(record) => {
                    auth_state.set(AuthState {
                        session: Some(record),
                        loading: false,
                    });
                    nav.replace(Route::Posts {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page auth-form",

            h1 { "Create an account" }

            form {
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "tel",
                    placeholder: "Phone number",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }

                input {
                    placeholder: "User name",
                    value: user_name(),
                    oninput: move |evt: FormEvent| user_name.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                textarea {
                    placeholder: "Tell people about yourself (optional)",
                    value: biography(),
                    oninput: move |evt: FormEvent| biography.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
