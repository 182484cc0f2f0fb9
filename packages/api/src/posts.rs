//! # PostsFeed — post list state controller
//!
//! [`PostsFeed`] owns the client's view of the post list plus a request
//! status (`is_loading`, `error`). The list is only ever a verbatim snapshot
//! of the last successful `GET /api/post/list`: no mutation is applied
//! locally. Instead, every mutating action (create, edit, delete, comment)
//! re-fetches the whole list after the server confirms it, trading one extra
//! round trip for the guarantee that derived fields — comment lists,
//! ordering — never drift from the server's view.
//!
//! Failures follow a dual-channel policy: the `error` field is set for
//! display *and* the [`ApiError`] propagates to the caller. `is_loading` is
//! always cleared on exit, success or failure.
//!
//! Two overlapping mutations are not sequenced against each other; each
//! triggers its own refresh and the last refresh wins wholesale, which is
//! sound because a refresh replaces the entire list.

use serde_json::json;
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Envelope, Post};

/// Post list state and the actions that drive it.
#[derive(Clone, Debug)]
pub struct PostsFeed<S> {
    client: ApiClient<S>,
    pub posts: Vec<Post>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<S: SessionStore> PostsFeed<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self {
            client,
            posts: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    /// Replace the list with the server's current view.
    ///
    /// A `success: false` envelope without transport failure yields an empty
    /// list; a transport failure empties the list, records the message, and
    /// propagates.
    pub async fn fetch_posts(&mut self) -> Result<Vec<Post>, ApiError> {
        self.is_loading = true;
        self.error = None;

        let result = self.client.get::<Vec<Post>>("/api/post/list").await;
        let outcome = match result {
            Ok(envelope) => {
                self.posts = if envelope.success {
                    envelope.data.unwrap_or_default()
                } else {
                    Vec::new()
                };
                Ok(self.posts.clone())
            }
            Err(err) => {
                self.error = Some(err.message.clone());
                self.posts = Vec::new();
                Err(err)
            }
        };
        self.is_loading = false;
        outcome
    }

    /// Publish a post, then refresh the list so the caller sees the
    /// canonical server state rather than an optimistic insert.
    pub async fn create_post(&mut self, content: &str) -> Result<Envelope<bool>, ApiError> {
        self.is_loading = true;
        self.error = None;

        let body = json!({ "content": content });
        let envelope: Envelope<bool> = match self.client.post("/api/post/create", &body).await {
            Ok(envelope) => envelope,
            Err(err) => return self.fail(err),
        };

        // Refresh only once the server confirms the creation.
        if envelope.success && envelope.data.unwrap_or(false) {
            if let Err(err) = self.fetch_posts().await {
                return self.fail(err);
            }
        }
        self.is_loading = false;
        Ok(envelope)
    }

    /// Edit a post's content. Authorization is the server's call; the feed
    /// does not check ownership.
    pub async fn update_post(
        &mut self,
        post_id: i64,
        content: &str,
    ) -> Result<Envelope<bool>, ApiError> {
        self.is_loading = true;
        self.error = None;

        let body = json!({ "postId": post_id, "content": content });
        let envelope: Envelope<bool> = match self.client.put("/api/post/edit", &body).await {
            Ok(envelope) => envelope,
            Err(err) => return self.fail(err),
        };

        if envelope.success {
            if let Err(err) = self.fetch_posts().await {
                return self.fail(err);
            }
        }
        self.is_loading = false;
        Ok(envelope)
    }

    /// Delete a post. `Ok(true)` after the delete+refresh cycle; any failure
    /// propagates instead of returning `false`.
    pub async fn delete_post(&mut self, post_id: i64) -> Result<bool, ApiError> {
        self.is_loading = true;
        self.error = None;

        let path = format!("/api/post/delete/{post_id}");
        let envelope: Envelope<bool> = match self.client.delete(&path).await {
            Ok(envelope) => envelope,
            Err(err) => return self.fail(err),
        };

        if envelope.success {
            if let Err(err) = self.fetch_posts().await {
                return self.fail(err);
            }
        }
        self.is_loading = false;
        Ok(true)
    }

    /// Comment on a post, then refresh so comment lists come straight from
    /// the server.
    pub async fn add_comment(
        &mut self,
        post_id: i64,
        content: &str,
    ) -> Result<Envelope<bool>, ApiError> {
        let body = json!({ "postId": post_id, "content": content });
        let envelope: Envelope<bool> = self.client.post("/api/comment/create", &body).await?;

        if envelope.success {
            self.fetch_posts().await?;
        }
        Ok(envelope)
    }

    fn fail<T>(&mut self, err: ApiError) -> Result<T, ApiError> {
        tracing::warn!(kind = ?err.kind, "post action failed: {}", err.message);
        self.error = Some(err.message.clone());
        self.is_loading = false;
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ErrorKind;
    use store::MemoryStore;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn feed_for(server: &MockServer) -> PostsFeed<MemoryStore> {
        let client = ApiClient::new(ApiConfig::new(server.uri()), MemoryStore::new()).unwrap();
        PostsFeed::new(client)
    }

    fn list_body(posts: serde_json::Value) -> serde_json::Value {
        json!({ "success": true, "message": "ok", "data": posts })
    }

    fn sample_posts() -> serde_json::Value {
        json!([
            {
                "postId": 1,
                "userId": 7,
                "userName": "bob",
                "content": "first!",
                "comments": [
                    {"commentId": 3, "postId": 1, "userId": 8, "userName": "eve", "content": "hi"}
                ]
            },
            {"postId": 2, "userId": 7, "userName": "bob", "content": "again", "comments": []}
        ])
    }

    async fn mount_list(server: &MockServer, posts: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/post/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(posts)))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn fetch_replaces_list_wholesale() {
        let server = MockServer::start().await;
        mount_list(&server, sample_posts()).await;

        let mut feed = feed_for(&server);
        let posts = feed.fetch_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(feed.posts, posts);
        assert_eq!(feed.posts[0].comments[0].user_name, "eve");
        assert!(!feed.is_loading);
        assert!(feed.error.is_none());
    }

    #[tokio::test]
    async fn fetch_envelope_failure_yields_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/post/list"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": false})),
            )
            .mount(&server)
            .await;

        let mut feed = feed_for(&server);
        let posts = feed.fetch_posts().await.unwrap();
        assert!(posts.is_empty());
        assert!(feed.error.is_none());
        assert!(!feed.is_loading);
    }

    #[tokio::test]
    async fn fetch_transport_failure_empties_list_and_propagates() {
        let server = MockServer::start().await;
        mount_list(&server, sample_posts()).await;

        let mut feed = feed_for(&server);
        feed.fetch_posts().await.unwrap();
        assert_eq!(feed.posts.len(), 2);

        // Server goes away: the stale list must not survive.
        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/api/post/list"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = feed.fetch_posts().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert!(feed.posts.is_empty());
        assert_eq!(feed.error.as_deref(), Some(err.message.as_str()));
        assert!(!feed.is_loading);
    }

    #[tokio::test]
    async fn create_refreshes_to_canonical_list() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/post/create"))
            .and(body_json(json!({"content": "hello world"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "ok",
                "data": true
            })))
            .mount(&server)
            .await;
        mount_list(&server, sample_posts()).await;

        let mut feed = feed_for(&server);
        let envelope = feed.create_post("hello world").await.unwrap();
        assert!(envelope.success);

        // The visible list is exactly what the server's list endpoint
        // returned, not a local insert of "hello world".
        assert_eq!(feed.posts.len(), 2);
        assert_eq!(feed.posts[0].content, "first!");
        assert!(!feed.is_loading);
    }

    #[tokio::test]
    async fn create_without_confirmation_skips_refresh() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/post/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "rejected",
                "data": false
            })))
            .mount(&server)
            .await;

        let mut feed = feed_for(&server);
        let envelope = feed.create_post("spam").await.unwrap();
        assert_eq!(envelope.data, Some(false));

        // Only the create call went out; no list refresh.
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!feed.is_loading);
    }

    #[tokio::test]
    async fn create_transport_failure_sets_error_and_propagates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/post/create"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false,
                "message": "Database unavailable"
            })))
            .mount(&server)
            .await;

        let mut feed = feed_for(&server);
        let err = feed.create_post("hello").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(feed.error.as_deref(), Some("Database unavailable"));
        assert!(!feed.is_loading);
    }

    #[tokio::test]
    async fn failed_refresh_propagates_from_inside_create() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/post/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": true
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/post/list"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut feed = feed_for(&server);
        let err = feed.create_post("hello").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert!(feed.error.is_some());
        assert!(!feed.is_loading);
    }

    #[tokio::test]
    async fn update_refreshes_after_success() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/post/edit"))
            .and(body_json(json!({"postId": 1, "content": "edited"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": true
            })))
            .mount(&server)
            .await;
        mount_list(&server, sample_posts()).await;

        let mut feed = feed_for(&server);
        let envelope = feed.update_post(1, "edited").await.unwrap();
        assert!(envelope.success);
        assert_eq!(feed.posts.len(), 2);
    }

    #[tokio::test]
    async fn delete_returns_true_after_refresh_cycle() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/post/delete/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": true
            })))
            .mount(&server)
            .await;
        mount_list(&server, json!([sample_posts()[0]])).await;

        let mut feed = feed_for(&server);
        assert!(feed.delete_post(2).await.unwrap());
        assert_eq!(feed.posts.len(), 1);
        assert_eq!(feed.posts[0].post_id, 1);
    }

    #[tokio::test]
    async fn delete_failure_propagates_instead_of_false() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/post/delete/2"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "success": false,
                "message": "Not your post"
            })))
            .mount(&server)
            .await;

        let mut feed = feed_for(&server);
        let err = feed.delete_post(2).await.unwrap_err();
        assert_eq!(err.message, "Not your post");
        assert_eq!(feed.error.as_deref(), Some("Not your post"));
        assert!(!feed.is_loading);
    }

    #[tokio::test]
    async fn comment_refreshes_and_fails_with_tagged_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/comment/create"))
            .and(body_json(json!({"postId": 1, "content": "nice"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": true
            })))
            .mount(&server)
            .await;
        mount_list(&server, sample_posts()).await;

        let mut feed = feed_for(&server);
        let envelope = feed.add_comment(1, "nice").await.unwrap();
        assert!(envelope.success);
        assert_eq!(feed.posts[0].comments.len(), 1);

        // Failure path carries the same tagged error as every other action.
        server.reset().await;
        Mock::given(method("POST"))
            .and(path("/api/comment/create"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = feed.add_comment(1, "again").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
    }
}
