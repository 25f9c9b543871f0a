//! # Subscription: a consumer's cursor over a channel's event sequence.
//!
//! A subscription is pull-based: `recv()` either yields the next event,
//! suspends the consuming task cooperatively until one arrives, or signals
//! end-of-sequence. It is not restartable once exhausted; a fresh cursor
//! comes from [`Channel::subscribe`](super::Channel::subscribe).
//!
//! ## End-of-sequence
//! `recv()` returns `None` when either:
//! - the channel was closed and the backlog is drained, or
//! - a newer `subscribe()` call superseded this cursor (replace semantics).
//!
//! [`Subscription::try_recv`] distinguishes the two via [`TryRecvError`].
//!
//! ## Consumption styles
//! ```text
//! while let Some(ev) = sub.recv().await { ... }       // pull loop
//! sub.into_stream()                                   // futures Stream
//! spawn_observer(sub, observer)                       // worker-driven (observers module)
//! ```
//!
//! Dropping a subscription releases consumer-side resources only; the
//! producer is never signalled.

use std::sync::Arc;

use futures::Stream;

use crate::error::TryRecvError;

use super::Shared;

/// How an exhausted cursor ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminal {
    /// Channel closed and backlog drained.
    Closed,
    /// Superseded by a newer `subscribe()` call.
    Detached,
}

/// Pull-based cursor over one channel's remaining event sequence.
///
/// ### Rules
/// - Events arrive in exactly emission order, each delivered once.
/// - The sequence is potentially infinite; it terminates only on channel
///   close (after drain) or when this cursor is superseded.
/// - Once `recv()` has returned `None`, it returns `None` forever.
pub struct Subscription<T> {
    shared: Arc<Shared<T>>,
    generation: u64,
    finished: Option<Terminal>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(shared: Arc<Shared<T>>, generation: u64) -> Self {
        Self {
            shared,
            generation,
            finished: None,
        }
    }

    /// Receives the next event, suspending until one is available.
    ///
    /// Returns `None` at end-of-sequence (channel closed and drained, or
    /// cursor superseded). Suspension is cooperative; no OS thread is
    /// blocked.
    pub async fn recv(&mut self) -> Option<T> {
        if self.finished.is_some() {
            return None;
        }
        loop {
            {
                let mut state = self.shared.lock();
                if state.generation != self.generation {
                    self.finished = Some(Terminal::Detached);
                    drop(state);
                    // Pass the wakeup along in case the live cursor is parked.
                    self.shared.notify.notify_one();
                    return None;
                }
                if let Some(event) = state.backlog.pop_front() {
                    return Some(event);
                }
                if state.closed {
                    self.finished = Some(Terminal::Closed);
                    return None;
                }
            }
            self.shared.notify.notified().await;
        }
    }

    /// Non-blocking poll for the next event.
    ///
    /// Distinguishes a momentarily empty backlog ([`TryRecvError::Empty`])
    /// from the two terminal outcomes ([`TryRecvError::Closed`],
    /// [`TryRecvError::Detached`]).
    pub fn try_recv(&mut self) -> Result<T, TryRecvError> {
        match self.finished {
            Some(Terminal::Closed) => return Err(TryRecvError::Closed),
            Some(Terminal::Detached) => return Err(TryRecvError::Detached),
            None => {}
        }
        let mut state = self.shared.lock();
        if state.generation != self.generation {
            self.finished = Some(Terminal::Detached);
            drop(state);
            self.shared.notify.notify_one();
            return Err(TryRecvError::Detached);
        }
        if let Some(event) = state.backlog.pop_front() {
            return Ok(event);
        }
        if state.closed {
            self.finished = Some(Terminal::Closed);
            return Err(TryRecvError::Closed);
        }
        Err(TryRecvError::Empty)
    }

    /// True once the cursor has observed end-of-sequence.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.finished.is_some()
    }

    /// Adapts the cursor into a [`futures`] stream ending at
    /// end-of-sequence.
    pub fn into_stream(self) -> impl Stream<Item = T>
    where
        T: Send,
    {
        futures::stream::unfold(self, |mut sub| async move {
            sub.recv().await.map(|event| (event, sub))
        })
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("generation", &self.generation)
            .field("finished", &self.finished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use crate::{Channel, TryRecvError};

    #[tokio::test(flavor = "current_thread")]
    async fn test_try_recv_reports_empty_then_event() {
        let ch = Channel::open();
        let mut sub = ch.subscribe();

        assert_eq!(sub.try_recv(), Err(TryRecvError::Empty));
        ch.emit(7);
        assert_eq!(sub.try_recv(), Ok(7));
        assert_eq!(sub.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_try_recv_distinguishes_terminal_outcomes() {
        let ch = Channel::open();
        let mut replaced = ch.subscribe();
        let mut live = ch.subscribe();

        assert_eq!(replaced.try_recv(), Err(TryRecvError::Detached));
        assert!(replaced.is_terminated());

        ch.emit(1);
        ch.close();
        assert_eq!(live.try_recv(), Ok(1));
        assert_eq!(live.try_recv(), Err(TryRecvError::Closed));
        assert!(live.is_terminated());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_stream_ends_at_close() {
        let ch = Channel::open();
        let sub = ch.subscribe();

        ch.emit("a");
        ch.emit("b");
        ch.close();

        let collected: Vec<_> = sub.into_stream().collect().await;
        assert_eq!(collected, vec!["a", "b"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_dropping_a_cursor_leaves_the_channel_open() {
        let ch = Channel::open();
        let sub = ch.subscribe();
        drop(sub);

        ch.emit(5);
        assert!(!ch.is_closed());

        let mut next = ch.subscribe();
        assert_eq!(next.recv().await, Some(5));
    }
}
