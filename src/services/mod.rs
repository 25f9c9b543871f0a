//! Service facades: injectable publish/observe capabilities.
//!
//! Each facade wraps exactly one [`Channel`](crate::Channel), constructed
//! once per process entry point and handed to producers and the single UI
//! observer by dependency injection. No globals: tests swap a facade for a
//! freshly constructed one with deterministic emission control.
//!
//! ## Contents
//! - [`Service`] generic facade over one channel
//! - [`UploadService`] passthrough for [`UploadTask`](crate::UploadTask)
//! - [`FeedService`] passthrough for [`FeedUpdateRequest`](crate::FeedUpdateRequest)
//! - [`SnackbarService`] wraps each message into a single-element group
//!
//! ## Quick reference
//! - **Producers** call `publish(event)` from any concurrent context; no
//!   backpressure, no delivery confirmation.
//! - **The consumer** calls `observe()` once and iterates the returned
//!   [`Subscription`](crate::Subscription) for the container's lifetime.

mod facade;
mod feed;
mod snackbar;
mod upload;

pub use facade::Service;
pub use feed::FeedService;
pub use snackbar::SnackbarService;
pub use upload::UploadService;
