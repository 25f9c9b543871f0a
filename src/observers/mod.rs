//! Worker-driven event consumption for UI state containers.
//!
//! A container can iterate its [`Subscription`](crate::Subscription)
//! directly, or hand it to [`spawn_observer`] and receive events through the
//! [`Observe`] trait from a dedicated worker task. The worker isolates
//! observer panics so one bad handler cannot take the stream down.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   producer ── publish(event) ──► Channel ──► Subscription
//!                                                  │
//!                                     spawn_observer worker (tokio task)
//!                                                  │
//!                                         Observe::on_event(&event)
//! ```
//!
//! ## Contents
//! - [`Observe`] the handler contract
//! - [`spawn_observer`], [`ObserverHandle`] worker lifecycle
//! - [`DebugPrinter`] stdout observer _(feature `logging`, demo only)_

mod handle;
mod observer;

#[cfg(feature = "logging")]
mod log;

pub use handle::{spawn_observer, ObserverHandle};
pub use observer::Observe;

#[cfg(feature = "logging")]
pub use log::DebugPrinter;
