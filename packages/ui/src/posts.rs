//! Post feed signal and the actions that drive it.
//!
//! The feed semantics (loading/error status, refresh-after-mutation) live in
//! [`api::PostsFeed`]; this module only moves that controller in and out of
//! a Dioxus signal. Each action marks the published state as loading, runs
//! the controller on a working copy, and publishes the settled result, so
//! the semantics exist in exactly one place.

use api::{ApiError, Envelope, Post, PostsFeed};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::platform::PlatformStore;

/// Create a feed signal bound to the shared API client.
pub fn use_posts_feed() -> Signal<PostsFeed<PlatformStore>> {
    let auth = use_api();
    use_signal(move || PostsFeed::new(auth.client().clone()))
}

/// Load the list from the server, replacing it wholesale.
pub async fn refresh(mut feed: Signal<PostsFeed<PlatformStore>>) -> Result<Vec<Post>, ApiError> {
    feed.write().is_loading = true;
    let mut working = feed();
    let outcome = working.fetch_posts().await;
    feed.set(working);
    outcome
}

/// Publish a post and refresh.
pub async fn create(
    mut feed: Signal<PostsFeed<PlatformStore>>,
    content: String,
) -> Result<Envelope<bool>, ApiError> {
    feed.write().is_loading = true;
    let mut working = feed();
    let outcome = working.create_post(&content).await;
    feed.set(working);
    outcome
}

/// Edit a post's content and refresh.
pub async fn edit(
    mut feed: Signal<PostsFeed<PlatformStore>>,
    post_id: i64,
    content: String,
) -> Result<Envelope<bool>, ApiError> {
    feed.write().is_loading = true;
    let mut working = feed();
    let outcome = working.update_post(post_id, &content).await;
    feed.set(working);
    outcome
}

/// Delete a post and refresh.
pub async fn remove(
    mut feed: Signal<PostsFeed<PlatformStore>>,
    post_id: i64,
) -> Result<bool, ApiError> {
    feed.write().is_loading = true;
    let mut working = feed();
    let outcome = working.delete_post(post_id).await;
    feed.set(working);
    outcome
}

/// Comment on a post and refresh. Does not toggle the loading flag; a
/// comment submit has its own inline affordance in the view.
pub async fn comment(
    mut feed: Signal<PostsFeed<PlatformStore>>,
    post_id: i64,
    content: String,
) -> Result<Envelope<bool>, ApiError> {
    let mut working = feed();
    let outcome = working.add_comment(post_id, &content).await;
    feed.set(working);
    outcome
}
