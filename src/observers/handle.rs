//! # Observer worker lifecycle.
//!
//! [`spawn_observer`] pumps a [`Subscription`] into an [`Observe`] handler
//! from a dedicated tokio task. The returned [`ObserverHandle`] carries the
//! worker's join handle and a cancellation token for explicit shutdown.
//!
//! ## Worker loop
//! ```text
//! loop {
//!   ├─► sub.recv()  (polled first)
//!   │     ├─ Some(event)      → on_event(&event)   (panic-isolated)
//!   │     └─ None             → exit (end-of-sequence)
//!   └─► cancelled (only while the subscription is idle) → exit
//! }
//! ```
//!
//! ## Rules
//! - Events reach the observer **sequentially**, in emission order.
//! - A panic in `on_event` is caught and reported; the loop continues.
//! - Queued events drain before cancellation takes effect; shutdown stops an
//!   **idle** worker immediately.
//! - Dropping the handle detaches the worker (it keeps running until
//!   end-of-sequence); call [`ObserverHandle::shutdown`] to stop it early.

use std::sync::Arc;

use futures::FutureExt;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::channel::Subscription;

use super::Observe;

/// Handle to a running observer worker.
pub struct ObserverHandle {
    worker: JoinHandle<()>,
    token: CancellationToken,
}

impl ObserverHandle {
    /// Cancels the worker and awaits its completion.
    pub async fn shutdown(self) {
        self.token.cancel();
        let _ = self.worker.await;
    }

    /// True once the worker task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }
}

/// Spawns a worker that drives `observer` from `subscription`.
///
/// The worker exits at end-of-sequence (channel closed and drained, or the
/// subscription superseded) or when the handle's [`ObserverHandle::shutdown`]
/// is called.
pub fn spawn_observer<T>(
    mut subscription: Subscription<T>,
    observer: Arc<dyn Observe<T>>,
) -> ObserverHandle
where
    T: Send + 'static,
{
    let token = CancellationToken::new();
    let child = token.clone();

    let worker = tokio::spawn(async move {
        loop {
            // Biased toward recv: queued events drain before cancellation
            // takes effect, matching the close-then-drain channel contract.
            let event = tokio::select! {
                biased;
                event = subscription.recv() => event,
                _ = child.cancelled() => break,
            };
            let Some(event) = event else { break };

            let fut = observer.on_event(&event);
            if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                eprintln!(
                    "[eventline] observer '{}' panicked: {:?}",
                    observer.name(),
                    panic_err
                );
            }
        }
    });

    ObserverHandle { worker, token }
}
