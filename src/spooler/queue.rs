//! Bounded hand-off queues.
//!
//! This module provides the fixed-capacity FIFO used between pipeline
//! stages. Capacity is enforced with a counting semaphore of empty slots:
//! a producer takes one slot permit before touching the queue, and a
//! consumer returns the permit after it has removed an item. The item
//! sequence itself is guarded by its own short-lived mutex, which is never
//! held across an await point.

use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::Semaphore;

/// A fixed-capacity FIFO with blocking enqueue
#[derive(Debug)]
pub struct BoundedQueue<T> {
    capacity: usize,
    slots: Semaphore,
    items: Mutex<VecDeque<T>>,
}

impl<T> BoundedQueue<T> {
    /// Creates a queue holding at most `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be at least 1");
        Self {
            capacity,
            slots: Semaphore::new(capacity),
            items: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Enqueues an item, waiting until a slot is free.
    ///
    /// This is the backpressure point: when the queue is full the producer
    /// suspends here until a consumer removes an item.
    pub async fn push(&self, item: T) {
        let permit = self
            .slots
            .acquire()
            .await
            .expect("slot semaphore is never closed");
        permit.forget();
        self.items.lock().push_back(item);
    }

    /// Removes the oldest item, if any, and releases its slot back to
    /// producers
    pub fn try_pop(&self) -> Option<T> {
        let item = self.items.lock().pop_front();
        if item.is_some() {
            self.slots.add_permits(1);
        }
        item
    }

    /// Returns the configured capacity
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Returns true if the queue holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
