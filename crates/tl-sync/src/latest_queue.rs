//! `LatestQueue` — single-slot blocking handoff of the most recent value.
//!
//! # Why this exists
//!
//! A phase toggle is only interesting in its latest state: a waiter that
//! slept through an intermediate transition does not want a backlog of stale
//! values, it wants the newest one.  A channel with history would deliver
//! outdated phases; a bare atomic would force waiters to spin.  The single
//! slot gives both properties at once: senders overwrite whatever was not
//! yet consumed, receivers sleep on a condvar until something arrives.
//!
//! # Delivery policy
//!
//! - **Overwrite on send**: an unconsumed value is discarded in favor of the
//!   new one.  Send never waits for a consumer.
//! - **Single-winner receive**: each stored value is taken by exactly one
//!   receiver.  Multiple blocked receivers compete; this is not a broadcast.

use std::sync::{Condvar, Mutex, PoisonError};

use crate::error::{QueueError, QueueResult};

struct Slot<T> {
    value:  Option<T>,
    closed: bool,
}

/// Thread-safe container holding at most one pending value.
///
/// One producer, any number of competing consumers.  Share via `&` or `Arc`;
/// the type is deliberately not `Clone`.
pub struct LatestQueue<T> {
    slot:  Mutex<Slot<T>>,
    ready: Condvar,
}

impl<T> LatestQueue<T> {
    pub fn new() -> Self {
        Self {
            slot:  Mutex::new(Slot { value: None, closed: false }),
            ready: Condvar::new(),
        }
    }

    /// Store `value`, discarding any unconsumed predecessor, and wake one
    /// blocked receiver.
    ///
    /// Never blocks waiting for a consumer; the lock is held only for the
    /// overwrite itself.  Fails with [`QueueError::Closed`] once the queue
    /// has been closed.
    pub fn send(&self, value: T) -> QueueResult<()> {
        let mut slot = self.slot.lock().map_err(|_| QueueError::Poisoned)?;
        if slot.closed {
            return Err(QueueError::Closed);
        }
        slot.value = Some(value);
        self.ready.notify_one();
        Ok(())
    }

    /// Block until a value is available, then take it (the slot becomes
    /// empty again).
    ///
    /// The wait predicate is re-checked after every wakeup, so spurious
    /// wakeups and competing receivers are both handled: a receiver that
    /// loses the race goes back to sleep.  If several sends happened since
    /// the last receive, only the latest value is returned.
    ///
    /// Fails with [`QueueError::Closed`] once the queue is closed and the
    /// slot drained; a value sent just before close is still delivered.
    pub fn recv(&self) -> QueueResult<T> {
        let mut slot = self.slot.lock().map_err(|_| QueueError::Poisoned)?;
        loop {
            if let Some(value) = slot.value.take() {
                return Ok(value);
            }
            if slot.closed {
                return Err(QueueError::Closed);
            }
            slot = self.ready.wait(slot).map_err(|_| QueueError::Poisoned)?;
        }
    }

    /// Take the pending value without blocking.
    ///
    /// `Ok(None)` means the slot is currently empty on an open queue.
    pub fn try_recv(&self) -> QueueResult<Option<T>> {
        let mut slot = self.slot.lock().map_err(|_| QueueError::Poisoned)?;
        match slot.value.take() {
            Some(value) => Ok(Some(value)),
            None if slot.closed => Err(QueueError::Closed),
            None => Ok(None),
        }
    }

    /// Close the queue: further sends fail and every blocked receiver wakes
    /// with [`QueueError::Closed`] once the slot is drained.  Idempotent.
    ///
    /// Succeeds even if the lock is poisoned, so shutdown always wakes
    /// waiters.
    pub fn close(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.closed = true;
        self.ready.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .closed
    }
}

impl<T> Default for LatestQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
