//! # Core observer trait.
//!
//! `Observe` is the extension point for consuming a channel without writing
//! the pump loop by hand. Each observer is driven by a dedicated worker task
//! spawned via [`spawn_observer`](super::spawn_observer).
//!
//! ## Contract
//! - Implementations may be slow (state folding, I/O) — they delay only
//!   their own stream position, never the producer.
//! - Panics inside `on_event` are caught and reported by the worker; the
//!   stream keeps flowing.

use async_trait::async_trait;

/// Contract for event observers.
///
/// Called from an observer-dedicated worker task. Implementations should
/// avoid blocking the async runtime (prefer async I/O and cooperative
/// waits).
#[async_trait]
pub trait Observe<T>: Send + Sync + 'static {
    /// Handles a single event.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    async fn on_event(&self, event: &T);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
