//! # Upload task descriptors.
//!
//! An [`UploadTask`] describes one pending media upload the background
//! pipeline should perform. Two variants exist:
//! - `Post`: a new post with caption and local media files;
//! - `Avatar`: a profile picture change, where `image_data: None` means
//!   "remove the current avatar".
//!
//! The `id()` projection gives callers a stable key per task for
//! deduplication and progress display; the channel never inspects it.

use serde::{Deserialize, Serialize};

/// Pending media upload, discriminated by the serde `type` tag.
///
/// ## Example
/// ```rust
/// use eventline::UploadTask;
///
/// let task = UploadTask::Post {
///     post_id: "p1".into(),
///     caption: "hi".into(),
///     files: vec!["file:///tmp/a.jpg".into()],
/// };
/// assert_eq!(task.id(), "p1");
/// assert_eq!(task.as_label(), "post");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UploadTask {
    /// Upload a new post with its media files.
    Post {
        /// Identity of the post being created.
        post_id: String,
        /// User-entered caption.
        caption: String,
        /// Local file URIs to upload, in selection order.
        files: Vec<String>,
    },
    /// Replace (or remove) the user's avatar.
    Avatar {
        /// Identity of the user whose avatar changes.
        id: String,
        /// Raw image bytes; `None` removes the avatar.
        #[serde(default)]
        image_data: Option<Vec<u8>>,
    },
}

impl UploadTask {
    /// Identity derived per variant, used by callers for dedup/display.
    pub fn id(&self) -> &str {
        match self {
            UploadTask::Post { post_id, .. } => post_id,
            UploadTask::Avatar { id, .. } => id,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            UploadTask::Post { .. } => "post",
            UploadTask::Avatar { .. } => "avatar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_derived_per_variant() {
        let post = UploadTask::Post {
            post_id: "p9".into(),
            caption: String::new(),
            files: vec![],
        };
        let avatar = UploadTask::Avatar {
            id: "u3".into(),
            image_data: Some(vec![0xFF]),
        };
        assert_eq!(post.id(), "p9");
        assert_eq!(avatar.id(), "u3");
    }

    #[test]
    fn test_json_discriminant_selects_variant() {
        let decoded: UploadTask =
            serde_json::from_str(r#"{"type":"avatar","id":"u1"}"#).expect("valid payload");
        assert_eq!(
            decoded,
            UploadTask::Avatar {
                id: "u1".into(),
                image_data: None,
            }
        );
    }

    #[test]
    fn test_unknown_discriminant_is_a_decode_error() {
        let malformed = serde_json::from_str::<UploadTask>(r#"{"type":"story","id":"u1"}"#);
        assert!(malformed.is_err());
    }
}
