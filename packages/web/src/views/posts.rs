//! Post feed: composer, list, per-post edit/delete and comments.
//!
//! Every mutation goes through `ui::posts`, which re-fetches the whole list
//! after the server confirms — the cards below always render the server's
//! view, never a local guess.

use api::{Post, PostsFeed};
use dioxus::prelude::*;
use ui::PlatformStore;

#[component]
pub fn Posts() -> Element {
    let auth = ui::use_auth();
    let feed = ui::use_posts_feed();
    let mut draft = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Initial load; failures surface through the feed's error field.
    let _loader = use_resource(move || async move {
        let _ = ui::posts::refresh(feed).await;
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let content = draft().trim().to_string();
            if content.is_empty() {
                return;
            }
            submitting.set(true);
            if ui::posts::create(feed, content).await.is_ok() {
                draft.set(String::new());
            }
            submitting.set(false);
        });
    };

    let state = feed();
    let current_user = auth().session.as_ref().map(|s| s.user_id);

    rsx! {
        div {
            class: "page posts",

            form {
                class: "composer",
                onsubmit: handle_create,
                textarea {
                    placeholder: "What's happening?",
                    value: draft(),
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: submitting(),
                    "Post"
                }
            }

            if let Some(err) = state.error {
                div { class: "form-error", "{err}" }
            }

            if state.is_loading {
                p { class: "feed-status", "Loading..." }
            } else if state.posts.is_empty() {
                p { class: "feed-status", "Nothing here yet. Say something!" }
            }

            for post in state.posts {
                PostCard {
                    key: "{post.post_id}",
                    feed: feed,
                    post: post,
                    current_user: current_user,
                }
            }
        }
    }
}

#[component]
fn PostCard(
    feed: Signal<PostsFeed<PlatformStore>>,
    post: Post,
    current_user: Option<i64>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut edit_draft = use_signal(String::new);
    let mut comment_draft = use_signal(String::new);

    let post_id = post.post_id;
    let mine = current_user == Some(post.user_id);
    let content = post.content.clone();

    let start_edit = move |_| {
        edit_draft.set(content.clone());
        editing.set(true);
    };

    let handle_edit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let content = edit_draft().trim().to_string();
            if content.is_empty() {
                return;
            }
            if ui::posts::edit(feed, post_id, content).await.is_ok() {
                editing.set(false);
            }
        });
    };

    let handle_delete = move |_| {
        spawn(async move {
            let _ = ui::posts::remove(feed, post_id).await;
        });
    };

    let handle_comment = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let content = comment_draft().trim().to_string();
            if content.is_empty() {
                return;
            }
            if ui::posts::comment(feed, post_id, content).await.is_ok() {
                comment_draft.set(String::new());
            }
        });
    };

    rsx! {
        article {
            class: "post-card",

            header {
                span { class: "post-author", "{post.user_name}" }
                if mine {
                    div {
                        class: "post-actions",
                        button { onclick: start_edit, "Edit" }
                        button { class: "danger", onclick: handle_delete, "Delete" }
                    }
                }
            }

            if editing() {
                form {
                    onsubmit: handle_edit,
                    textarea {
                        value: edit_draft(),
                        oninput: move |evt: FormEvent| edit_draft.set(evt.value()),
                    }
                    button { r#type: "submit", "Save" }
                    button {
                        r#type: "button",
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                }
            } else {
                p { class: "post-content", "{post.content}" }
            }

            section {
                class: "comments",
                for comment in post.comments.iter() {
                    div {
                        class: "comment",
                        span { class: "comment-author", "{comment.user_name}" }
                        span { class: "comment-content", "{comment.content}" }
                    }
                }

                form {
                    class: "comment-form",
                    onsubmit: handle_comment,
                    input {
                        placeholder: "Add a comment",
                        value: comment_draft(),
                        oninput: move |evt: FormEvent| comment_draft.set(evt.value()),
                    }
                    button { r#type: "submit", "Reply" }
                }
            }
        }
    }
}
