//! # Snackbar facade.
//!
//! Unlike the passthrough facades, each published message is wrapped into a
//! single-element group before emission. The scaffold overlay therefore
//! always receives a "current visible set", whatever the burst size — today
//! every group has cardinality one; messages published concurrently arrive
//! as separate groups, never merged.

use crate::channel::Subscription;
use crate::events::SnackbarMessage;

use super::Service;

/// Publish/observe capability for transient user-facing messages.
///
/// ### Rules
/// - `publish(msg)` emits exactly the group `[msg]`.
/// - Groups arrive in publish order; no coalescing across publishes.
pub struct SnackbarService {
    inner: Service<Vec<SnackbarMessage>>,
}

impl SnackbarService {
    /// Creates the facade with a fresh open channel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Service::new(),
        }
    }

    /// Shows one message: emits the single-element group `[message]`.
    pub fn publish(&self, message: SnackbarMessage) {
        self.inner.publish(vec![message]);
    }

    /// Returns the cursor the scaffold overlay iterates for its lifetime.
    ///
    /// Each item is the group of messages to display; currently always of
    /// length one.
    #[must_use]
    pub fn observe(&self) -> Subscription<Vec<SnackbarMessage>> {
        self.inner.observe()
    }

    /// Explicit shutdown; queued groups still drain.
    pub fn close(&self) {
        self.inner.close();
    }
}

impl Default for SnackbarService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn test_each_message_arrives_as_a_singleton_group() {
        let snackbar = SnackbarService::new();
        let mut sub = snackbar.observe();

        snackbar.publish(SnackbarMessage::info("post created"));
        snackbar.publish(SnackbarMessage::error("upload failed"));

        let first = sub.recv().await.expect("first group");
        assert_eq!(first, vec![SnackbarMessage::info("post created")]);

        // A message published right after the first is never merged in.
        let second = sub.recv().await.expect("second group");
        assert_eq!(second, vec![SnackbarMessage::error("upload failed")]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_groups_drain_after_close() {
        let snackbar = SnackbarService::new();
        let mut sub = snackbar.observe();

        snackbar.publish(SnackbarMessage::info("saved"));
        snackbar.close();

        assert_eq!(
            sub.recv().await,
            Some(vec![SnackbarMessage::info("saved")])
        );
        assert_eq!(sub.recv().await, None);
    }
}
