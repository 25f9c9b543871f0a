//! # Feed mutation requests.
//!
//! A [`FeedUpdateRequest`] tells the feed container that a post changed
//! somewhere else in the app (composer, detail screen, sync layer) and the
//! on-screen feed should be patched without a full reload.
//!
//! The `post_id()` projection is the identity consumers key on when
//! deduplicating and ordering pending requests for the same post.

use serde::{Deserialize, Serialize};

/// One pending feed mutation, discriminated by the serde `type` tag.
///
/// ## Example
/// ```rust
/// use eventline::FeedUpdateRequest;
///
/// let req = FeedUpdateRequest::LikeToggled {
///     post_id: "p1".into(),
///     liked: true,
/// };
/// assert_eq!(req.post_id(), "p1");
/// assert_eq!(req.as_label(), "like_toggled");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedUpdateRequest {
    /// A new post finished uploading and should appear in the feed.
    Created {
        /// Identity of the new post.
        post_id: String,
    },
    /// An existing post's caption changed.
    Edited {
        /// Identity of the edited post.
        post_id: String,
        /// The new caption text.
        caption: String,
    },
    /// A post was deleted and should leave the feed.
    Deleted {
        /// Identity of the removed post.
        post_id: String,
    },
    /// The signed-in user liked or unliked a post.
    LikeToggled {
        /// Identity of the affected post.
        post_id: String,
        /// New like state after the toggle.
        liked: bool,
    },
    /// A comment was added to a post.
    CommentAdded {
        /// Identity of the commented post.
        post_id: String,
        /// Identity of the new comment.
        comment_id: String,
    },
}

impl FeedUpdateRequest {
    /// Identity projection: the post this request targets.
    ///
    /// Consumers dedupe and order pending requests per post id; two requests
    /// with the same `post_id()` address the same feed entry.
    pub fn post_id(&self) -> &str {
        match self {
            FeedUpdateRequest::Created { post_id }
            | FeedUpdateRequest::Edited { post_id, .. }
            | FeedUpdateRequest::Deleted { post_id }
            | FeedUpdateRequest::LikeToggled { post_id, .. }
            | FeedUpdateRequest::CommentAdded { post_id, .. } => post_id,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            FeedUpdateRequest::Created { .. } => "created",
            FeedUpdateRequest::Edited { .. } => "edited",
            FeedUpdateRequest::Deleted { .. } => "deleted",
            FeedUpdateRequest::LikeToggled { .. } => "like_toggled",
            FeedUpdateRequest::CommentAdded { .. } => "comment_added",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_is_uniform_across_variants() {
        let requests = vec![
            FeedUpdateRequest::Created { post_id: "p1".into() },
            FeedUpdateRequest::Edited {
                post_id: "p1".into(),
                caption: "new".into(),
            },
            FeedUpdateRequest::Deleted { post_id: "p1".into() },
            FeedUpdateRequest::LikeToggled {
                post_id: "p1".into(),
                liked: false,
            },
            FeedUpdateRequest::CommentAdded {
                post_id: "p1".into(),
                comment_id: "c1".into(),
            },
        ];
        assert!(requests.iter().all(|r| r.post_id() == "p1"));
    }

    #[test]
    fn test_json_round_trip_keeps_discriminant() {
        let req = FeedUpdateRequest::CommentAdded {
            post_id: "p2".into(),
            comment_id: "c7".into(),
        };
        let json = serde_json::to_string(&req).expect("serialize");
        assert!(json.contains(r#""type":"comment_added""#));
        let back: FeedUpdateRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, req);
    }
}
