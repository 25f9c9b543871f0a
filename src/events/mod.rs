//! Domain event payloads carried by the channels.
//!
//! Each payload is a discriminated variant type: the serde representation
//! carries a `type` tag, matching the JSON the collaborating backend layer
//! produces and consumes. Decode failures on malformed input surface as
//! `serde_json::Error` in that collaborator, never in the channel.
//!
//! ## Contents
//! - [`UploadTask`] media upload descriptors (post vs avatar)
//! - [`FeedUpdateRequest`] pending feed mutations keyed by post id
//! - [`SnackbarMessage`] user-facing transient messages
//!
//! Every payload exposes an identity projection (`id()` / `post_id()`)
//! callers use for deduplication and display; the channel itself never
//! inspects it.

mod feed;
mod snackbar;
mod upload;

pub use feed::FeedUpdateRequest;
pub use snackbar::{SnackbarKind, SnackbarMessage};
pub use upload::UploadTask;
