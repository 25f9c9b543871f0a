//! # Service: generic facade over one channel.
//!
//! A [`Service`] hides channel construction and lifetime from both sides:
//! producers see `publish`, the UI observer sees `observe`. The channel
//! lives exactly as long as the facade; there is no explicit teardown beyond
//! [`Service::close`] (or process exit).
//!
//! A freshly constructed, never-published service is also the test double
//! required by non-live configurations: its subscription is an empty,
//! never-ending sequence.

use crate::channel::{Channel, Publisher, Subscription};

/// Capability object exposing `publish`/`observe` over one channel.
///
/// ### Rules
/// - Exactly one channel per facade, created at construction, owned for the
///   facade's lifetime.
/// - `publish` is async-safe and fire-and-forget (see
///   [`Channel::emit`](crate::Channel::emit)).
/// - `observe` yields a cursor over the remaining sequence; a newer call
///   supersedes the previous cursor (replace semantics).
pub struct Service<T> {
    channel: Channel<T>,
}

impl<T> Service<T> {
    /// Creates a facade over a fresh open channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            channel: Channel::open(),
        }
    }

    /// Publishes one event. Callable from any concurrent context; never
    /// blocks, never fails, silently dropped after [`Service::close`].
    pub fn publish(&self, event: T) {
        self.channel.emit(event);
    }

    /// Returns the cursor the UI observer iterates for its lifetime.
    #[must_use]
    pub fn observe(&self) -> Subscription<T> {
        self.channel.subscribe()
    }

    /// Returns a cloneable write-only handle for background producers.
    #[must_use]
    pub fn publisher(&self) -> Publisher<T> {
        self.channel.publisher()
    }

    /// Explicit shutdown; queued events still drain to the observer.
    pub fn close(&self) {
        self.channel.close();
    }

    /// True once [`Service::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.channel.is_closed()
    }
}

impl<T> Default for Service<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Service<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TryRecvError;

    #[tokio::test(flavor = "current_thread")]
    async fn test_publish_reaches_the_observer_in_order() {
        let svc = Service::new();
        let mut sub = svc.observe();

        svc.publish("first");
        svc.publish("second");

        assert_eq!(sub.recv().await, Some("first"));
        assert_eq!(sub.recv().await, Some("second"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_fresh_service_is_an_empty_never_ending_double() {
        let svc: Service<u32> = Service::new();
        let mut sub = svc.observe();

        // Nothing published, nothing closed: the sequence is empty but alive.
        assert_eq!(sub.try_recv(), Err(TryRecvError::Empty));
        assert!(!sub.is_terminated());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_close_drains_then_terminates() {
        let svc = Service::new();
        let mut sub = svc.observe();

        svc.publish(1);
        svc.close();
        svc.publish(2);

        assert_eq!(sub.recv().await, Some(1));
        assert_eq!(sub.recv().await, None);
        assert!(svc.is_closed());
    }
}
