//! Multi-producer, single-consumer FIFO with a blocking pull.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Thread-safe operation queue.
///
/// `push` never waits on the consumer. `pull` parks the consumer on a
/// condition variable tied to the same lock that guards the storage, so the
/// empty check and the wait registration are atomic and a concurrent `push`
/// cannot be lost between them.
///
/// Items from one producer come out in the order that producer pushed them.
/// Across producers the order is whatever order their pushes took the lock.
#[derive(Debug)]
pub struct OperationQueue<T> {
    items: Mutex<VecDeque<T>>,
    ready: Condvar,
}

impl<T> OperationQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
        }
    }

    /// Appends `item` at the tail and wakes one parked consumer, if any.
    pub fn push(&self, item: T) {
        self.lock().push_back(item);
        self.ready.notify_one();
    }

    /// Removes and returns the head, blocking while the queue is empty.
    pub fn pull(&self) -> T {
        let mut items = self.lock();
        loop {
            if let Some(item) = items.pop_front() {
                return item;
            }
            // Spurious wakeups land back on the empty check.
            items = self
                .ready
                .wait(items)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Removes and returns the head without blocking.
    pub fn try_pull(&self) -> Option<T> {
        self.lock().pop_front()
    }

    /// Snapshot; may be stale as soon as it returns.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // A holder that panicked cannot leave the deque half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for OperationQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
