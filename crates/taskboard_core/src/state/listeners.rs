//! Ordered listener registry shared by board state containers.

use std::sync::{Arc, Mutex, PoisonError};

/// Callback receiving a full snapshot of the observed collection.
pub type Listener<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Append-only list of listeners, notified in registration order.
pub struct ListenerRegistry<T> {
    listeners: Mutex<Vec<Listener<T>>>,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one listener. There is no removal; listeners live as long as
    /// the registry.
    pub fn add(&self, listener: Listener<T>) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delivers `snapshot` to every listener, synchronously and in order.
    ///
    /// The listener list is copied before delivery so a listener may register
    /// another one; the new listener is first called on the next pass.
    pub fn notify(&self, snapshot: &[T]) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(snapshot);
        }
    }
}
