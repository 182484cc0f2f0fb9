//! Profile page: account details and biography editing.
//!
//! Saving patches only the biography; every other session field stays
//! exactly as the last login left it.

use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    let mut auth_state = ui::use_auth();
    let auth = ui::use_api();
    let mut biography = use_signal(String::new);
    let mut status = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Seed the editor from the current session.
    use_effect(move || {
        let current = auth_state().session.and_then(|s| s.biography);
        biography.set(current.unwrap_or_default());
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            status.set(None);
            error.set(None);
            saving.set(true);

            let bio = biography();
            match auth.update_biography(&bio).await {
                Ok(()) => {
                    // Mirror the persisted patch into the reactive state.
                    let mut state = auth_state();
                    if let Some(session) = state.session.as_mut() {
                        session.biography = Some(bio);
                    }
                    auth_state.set(state);
                    status.set(Some("Profile updated".to_string()));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let state = auth_state();
    let session = state.session.clone();

    rsx! {
        div {
            class: "page profile",

            h1 { "Your profile" }

            if let Some(session) = session {
                dl {
                    class: "profile-details",
                    dt { "User name" }
                    dd { "{session.user_name}" }
                    if let Some(email) = session.email.as_deref() {
                        dt { "Email" }
                        dd { "{email}" }
                    }
                }

                form {
                    onsubmit: handle_save,

                    if let Some(msg) = status() {
                        div { class: "form-status", "{msg}" }
                    }
                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    label { "Biography" }
                    textarea {
                        value: biography(),
                        oninput: move |evt: FormEvent| biography.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
