//! Login page with phone number and password form.

use dioxus::prelude::*;
use ui::AuthState;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth_state = ui::use_auth();
    let auth = ui::use_api();
    let nav = use_navigator();
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);

            let p = phone().trim().to_string();
            let pw = password();

            if p.is_empty() {
                error.set(Some("Please enter your phone number".to_string()));
                return;
            }
            if pw.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match auth.login(&p, &pw).await {
                Ok(record) => {
                    auth_state.set(AuthState {
                        session: Some(record),
                        loading: false,
                    });
                    nav.replace(Route::Posts {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page auth-form",

            h1 { "Log in" }

            form {
                onsubmit: handle_login,

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
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Log in" }
                }
            }

            p {
                "No account yet? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
