//! # Channel: the shared state machine behind publishers and subscriptions.
//!
//! A channel is an unbounded, ordered pipe from one logical producer to a
//! single attached consumer. Its state machine is deliberately small:
//!
//! ```text
//! States:       Open ──close()──► Closed          (terminal, no way back)
//! Transitions:  Open   --emit-->  Open            (append to backlog)
//!               Closed --emit-->  Closed          (dropped silently)
//!               close() is idempotent
//! ```
//!
//! ## Rules
//! - **Emission order is delivery order**: the backlog is a FIFO queue.
//! - **Close drains**: events queued before `close()` are still delivered;
//!   consumers observe end-of-sequence only once the backlog is empty.
//! - **Fire-and-forget producers**: `emit` never blocks, never fails, and is
//!   a silent no-op after `close()`.
//! - **Replace semantics**: each `subscribe()` supersedes the previous
//!   [`Subscription`]; the superseded cursor observes end-of-sequence.
//!
//! Mutual exclusion over the backlog and attachment state is a short,
//! await-free mutex section; wakeups go through [`tokio::sync::Notify`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;

use super::{Publisher, Subscription};

/// Interior state guarded by the mutex.
pub(crate) struct State<T> {
    /// Not-yet-delivered events in emission order.
    pub(crate) backlog: VecDeque<T>,
    /// Liveness flag; `true` once `close()` has been called.
    pub(crate) closed: bool,
    /// Identity of the currently attached subscription. Bumped on every
    /// `subscribe()`; a cursor whose generation falls behind is detached.
    pub(crate) generation: u64,
}

/// State shared by the channel and all handles derived from it.
pub(crate) struct Shared<T> {
    pub(crate) state: Mutex<State<T>>,
    pub(crate) notify: Notify,
}

impl<T> Shared<T> {
    pub(crate) fn lock(&self) -> MutexGuard<'_, State<T>> {
        // Critical sections are short and never panic; if another thread died
        // mid-panic anyway, keep serving the backlog rather than propagate.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends an event to the backlog and wakes the waiting consumer.
    ///
    /// Silent no-op once the channel is closed (fire-and-forget contract).
    pub(crate) fn emit(&self, event: T) {
        {
            let mut state = self.lock();
            if state.closed {
                return;
            }
            state.backlog.push_back(event);
        }
        self.notify.notify_one();
    }

    /// Marks the channel closed. Idempotent.
    ///
    /// Queued events still drain; the consumer observes end-of-sequence once
    /// the backlog is empty.
    pub(crate) fn close(&self) {
        {
            let mut state = self.lock();
            if state.closed {
                return;
            }
            state.closed = true;
        }
        self.notify.notify_one();
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

/// Ordered, closable, in-memory event pipe.
///
/// Owned by exactly one [`Service`](crate::Service) facade for the facade's
/// whole lifetime; producers get a [`Publisher`] clone, the UI observer gets
/// a [`Subscription`] via [`Channel::subscribe`].
///
/// ### Properties
/// - **Unbounded**: no capacity, no backpressure; sized for low-frequency
///   UI events.
/// - **Exactly-once per subscriber**: each event is handed to the attached
///   cursor once, in emission order.
/// - **Single consumer**: `subscribe()` uses replace semantics (see module
///   docs); there is never more than one live cursor.
pub struct Channel<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Channel<T> {
    /// Allocates a new channel in the open state with an empty backlog.
    #[must_use]
    pub fn open() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    backlog: VecDeque::new(),
                    closed: false,
                    generation: 0,
                }),
                notify: Notify::new(),
            }),
        }
    }

    /// Appends an event to the backlog in emission order.
    ///
    /// Never blocks. Dropped silently if the channel is closed.
    pub fn emit(&self, event: T) {
        self.shared.emit(event);
    }

    /// Closes the channel. Idempotent; queued events still drain.
    pub fn close(&self) {
        self.shared.close();
    }

    /// True once [`Channel::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }

    /// Number of emitted events not yet handed to the consumer.
    #[must_use]
    pub fn backlog_len(&self) -> usize {
        self.shared.lock().backlog.len()
    }

    /// Returns a cloneable write-only handle for producers.
    #[must_use]
    pub fn publisher(&self) -> Publisher<T> {
        Publisher::new(Arc::clone(&self.shared))
    }

    /// Attaches a new cursor over the remaining event sequence.
    ///
    /// Any previously returned [`Subscription`] is detached and observes
    /// end-of-sequence on its next poll. The new cursor starts at the oldest
    /// undelivered event, so a backlog accumulated before the UI observer
    /// arrived is not lost.
    #[must_use]
    pub fn subscribe(&self) -> Subscription<T> {
        let generation = {
            let mut state = self.shared.lock();
            state.generation += 1;
            state.generation
        };
        // Wake a cursor parked on the old generation so it can detach.
        self.shared.notify.notify_one();
        Subscription::new(Arc::clone(&self.shared), generation)
    }
}

impl<T> std::fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("Channel")
            .field("closed", &state.closed)
            .field("backlog", &state.backlog.len())
            .field("generation", &state.generation)
            .finish()
    }
}
