//! # Publisher: write-only capability over a channel.
//!
//! Producers (the upload pipeline, the backend sync layer) hold a
//! [`Publisher`] rather than the [`Channel`](super::Channel) itself, so the
//! only thing they can do is emit and close. Cheap to clone; every clone
//! feeds the same backlog.

use std::sync::Arc;

use super::Shared;

/// Cloneable write-only handle bound to one channel.
///
/// ### Properties
/// - **Non-blocking**: [`Publisher::emit`] returns immediately.
/// - **Fire-and-forget**: no delivery confirmation, no backpressure; emitting
///   on a closed channel is a silent no-op.
/// - **Cloneable**: internally an `Arc` over the channel state.
pub struct Publisher<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Publisher<T> {
    pub(crate) fn new(shared: Arc<Shared<T>>) -> Self {
        Self { shared }
    }

    /// Publishes one event in emission order.
    ///
    /// Never blocks and cannot fail; dropped silently after
    /// [`Publisher::close`].
    pub fn emit(&self, event: T) {
        self.shared.emit(event);
    }

    /// Closes the underlying channel. Idempotent; queued events still drain.
    pub fn close(&self) {
        self.shared.close();
    }

    /// True once the channel has been closed (by any handle).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> std::fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Channel;

    #[tokio::test(flavor = "current_thread")]
    async fn test_clones_feed_the_same_backlog() {
        let ch = Channel::open();
        let mut sub = ch.subscribe();

        let a = ch.publisher();
        let b = a.clone();
        a.emit("from-a");
        b.emit("from-b");

        assert_eq!(sub.recv().await, Some("from-a"));
        assert_eq!(sub.recv().await, Some("from-b"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_close_is_visible_through_every_handle() {
        let ch: Channel<u8> = Channel::open();
        let publisher = ch.publisher();

        publisher.close();
        assert!(publisher.is_closed());
        assert!(ch.is_closed());
    }
}
