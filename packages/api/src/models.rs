//! # Wire types
//!
//! The response envelope and the server-owned post/comment snapshots. Posts
//! and comments are never constructed or mutated client-side: they only
//! arrive from `GET /api/post/list`, and any field this client does not
//! model (timestamps, counters the server may add) is preserved in the
//! flattened `extra` map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `{success, data, message}` wrapper every API response uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// A post as the server reports it, comments attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A comment under a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    #[serde(default)]
    pub post_id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_fields() {
        let env: Envelope<Vec<Post>> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!env.success);
        assert!(env.message.is_none());
        assert!(env.data.is_none());
    }

    #[test]
    fn post_keeps_unmodeled_fields() {
        let json = r#"{
            "postId": 3,
            "userId": 1,
            "userName": "alice",
            "content": "hello",
            "createdAt": "2024-05-01T10:00:00",
            "comments": [
                {"commentId": 9, "postId": 3, "userId": 2, "userName": "bob", "content": "hi"}
            ]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.post_id, 3);
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].user_name, "bob");
        assert!(post.extra.contains_key("createdAt"));
    }
}
