//! # eventline
//!
//! **Eventline** is the in-memory event-stream layer of a client-side social
//! application built on unidirectional state management.
//!
//! It provides one generic, closable broadcast-style channel and the thin
//! domain facades the app wires through dependency injection: upload tasks,
//! feed-update requests, and snackbar messages. UI state containers observe a
//! facade and fold each event into locally held screen state; background
//! producers publish into it without ever blocking or seeing backpressure.
//!
//! ## Architecture
//! ### Overview
//! ```text
//! Producers (background):                    Consumer (one per facade):
//!   upload pipeline ─► UploadService ──► Channel<UploadTask> ──────────► Subscription ─► feed container
//!   backend sync    ─► FeedService ────► Channel<FeedUpdateRequest> ───► Subscription ─► feed container
//!   any caller      ─► SnackbarService ► Channel<Vec<SnackbarMessage>> ► Subscription ─► scaffold overlay
//!
//! Each facade owns exactly one Channel for its whole lifetime.
//! ```
//!
//! ### Channel lifecycle
//! ```text
//! Channel::open()              state = Open, backlog = []
//!   ├─► emit(e)                Open:   backlog.push_back(e), wake consumer
//!   │                          Closed: dropped silently (fire-and-forget)
//!   ├─► close()                Open → Closed (idempotent); backlog still drains
//!   └─► subscribe()            detaches the previous Subscription (replace
//!                              semantics) and attaches a cursor over the
//!                              remaining backlog
//!
//! Subscription::recv()
//!   ├─ Some(event)             next backlog item, emission order
//!   └─ None                    channel closed and drained, or superseded by a
//!                              newer subscribe() call
//! ```
//!
//! ## Delivery rules
//! - **Ordering**: every live subscription observes events in exactly the
//!   order they were emitted; no reordering, no coalescing.
//! - **Unbounded backlog**: producers never block and never observe
//!   backpressure; appropriate only for low-frequency UI events, not a
//!   general-purpose queue.
//! - **Single consumer, replace semantics**: each `subscribe()` call
//!   supersedes the previous subscription. Every facade here has exactly one
//!   UI observer; a re-subscribing screen takes over the stream instead of
//!   splitting it.
//! - **No durability**: in-memory only, lost at process exit.
//!
//! ## Features
//! | Area          | Description                                               | Key types / traits                                                   |
//! |---------------|-----------------------------------------------------------|----------------------------------------------------------------------|
//! | **Channel**   | Ordered, closable event pipe with a write-only handle.    | [`Channel`], [`Publisher`], [`Subscription`]                         |
//! | **Facades**   | Injectable publish/observe capabilities over one channel. | [`Service`], [`UploadService`], [`FeedService`], [`SnackbarService`] |
//! | **Payloads**  | Discriminated event variants with identity projections.   | [`UploadTask`], [`FeedUpdateRequest`], [`SnackbarMessage`]           |
//! | **Observers** | Worker-driven consumption with panic isolation.           | [`Observe`], [`ObserverHandle`]                                      |
//! | **Errors**    | Non-blocking poll outcomes.                               | [`TryRecvError`]                                                     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`DebugPrinter`] observer
//!   _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use eventline::{UploadService, UploadTask};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // One facade per process entry point, injected into producers and
//!     // the single UI observer.
//!     let uploads = UploadService::new();
//!     let mut sub = uploads.observe();
//!
//!     uploads.publish(UploadTask::Avatar {
//!         id: "u1".into(),
//!         image_data: None,
//!     });
//!     uploads.publish(UploadTask::Post {
//!         post_id: "p1".into(),
//!         caption: "hi".into(),
//!         files: vec![],
//!     });
//!
//!     assert_eq!(sub.recv().await.map(|t| t.id().to_string()), Some("u1".into()));
//!     assert_eq!(sub.recv().await.map(|t| t.id().to_string()), Some("p1".into()));
//!
//!     uploads.close();
//!     assert_eq!(sub.recv().await, None);
//! }
//! ```
mod channel;
mod error;
mod events;
mod observers;
mod services;

// ---- Public re-exports ----

pub use channel::{Channel, Publisher, Subscription};
pub use error::TryRecvError;
pub use events::{FeedUpdateRequest, SnackbarKind, SnackbarMessage, UploadTask};
pub use observers::{spawn_observer, Observe, ObserverHandle};
pub use services::{FeedService, Service, SnackbarService, UploadService};

// Optional: expose a simple built-in printing observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::DebugPrinter;
