//! Event channel: ordered, closable, in-memory pipe.
//!
//! This module groups the channel **state machine** and the two capability
//! handles derived from it: the write-only [`Publisher`] and the consumer-side
//! [`Subscription`] cursor.
//!
//! ## Contents
//! - [`Channel`] owning handle; `open` / `emit` / `close` / `subscribe`
//! - [`Publisher`] cloneable write-only capability for producers
//! - [`Subscription`] pull-based cursor with explicit end-of-sequence
//!
//! ## Quick reference
//! - **Producers**: upload pipeline, backend sync layer, any caller holding a
//!   [`Publisher`] or a facade (see [`crate::services`]).
//! - **Consumer**: exactly one UI state container per channel; a newer
//!   `subscribe()` call supersedes the previous subscription.
//!
//! See `lib.rs` for the system-level wiring diagram.

mod core;
mod publisher;
mod subscription;

pub use self::core::Channel;
pub use publisher::Publisher;
pub use subscription::Subscription;

pub(crate) use self::core::Shared;
