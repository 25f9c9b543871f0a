//! Error types for non-blocking channel polls.
//!
//! The channel itself has no fallible operations: `emit` is fire-and-forget
//! and `recv` signals end-of-sequence through `Option`. Only the
//! non-blocking [`try_recv`](crate::Subscription::try_recv) needs to say
//! *why* no event was returned, which is what [`TryRecvError`] does.

use thiserror::Error;

/// # Outcome of a non-blocking poll that produced no event.
///
/// [`TryRecvError::Empty`] is transient; the other two are terminal and the
/// cursor will never yield again.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    /// No event is queued right now; more may arrive.
    #[error("no event is currently queued")]
    Empty,

    /// The channel was closed and the backlog has drained.
    #[error("channel closed and backlog drained")]
    Closed,

    /// A newer `subscribe()` call superseded this cursor.
    #[error("subscription superseded by a newer subscribe call")]
    Detached,
}

impl TryRecvError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventline::TryRecvError;
    ///
    /// assert_eq!(TryRecvError::Empty.as_label(), "recv_empty");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TryRecvError::Empty => "recv_empty",
            TryRecvError::Closed => "recv_closed",
            TryRecvError::Detached => "recv_detached",
        }
    }

    /// True if the cursor is permanently exhausted.
    ///
    /// # Example
    /// ```
    /// use eventline::TryRecvError;
    ///
    /// assert!(!TryRecvError::Empty.is_terminal());
    /// assert!(TryRecvError::Closed.is_terminal());
    /// ```
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TryRecvError::Empty)
    }
}
