//! Listener registry and the handle returned by `subscribe`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::board::domain::Board;

/// Callback invoked with each committed board snapshot.
pub(super) type Listener = dyn Fn(&Board) + Send + Sync;

/// A registered listener and the newest revision it has been handed.
pub(super) struct RegisteredListener {
    callback: Arc<Listener>,
    delivered: AtomicU64,
}

impl RegisteredListener {
    /// Calls the listener unless it has already seen `revision` or a newer
    /// one. A nested or concurrent commit can overtake an older
    /// notification, and the older board must not reach the listener last.
    pub(super) fn deliver(&self, revision: u64, board: &Board) -> bool {
        let previous = self.delivered.fetch_max(revision, Ordering::AcqRel);
        if previous >= revision {
            return false;
        }
        (self.callback)(board);
        true
    }
}

#[derive(Default)]
pub(super) struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(u64, Arc<RegisteredListener>)>>,
}

impl ListenerRegistry {
    pub(super) fn register(self: &Arc<Self>, listener: Arc<Listener>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((
                id,
                Arc::new(RegisteredListener {
                    callback: listener,
                    delivered: AtomicU64::new(0),
                }),
            ));
        Subscription {
            id,
            registry: Arc::downgrade(self),
        }
    }

    /// Returns the current listeners in registration order.
    ///
    /// The lock is released before the caller invokes them, so a listener
    /// may subscribe, unsubscribe or mutate the store.
    pub(super) fn snapshot(&self) -> Vec<Arc<RegisteredListener>> {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(super) fn len(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub(super) fn clear(&self) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn remove(&self, id: u64) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Handle for a registered store listener.
///
/// The listener stays registered until the handle is dropped or
/// [`unsubscribe`](Self::unsubscribe) is called.
#[must_use = "dropping a Subscription unsubscribes its listener"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<ListenerRegistry>,
}

impl Subscription {
    /// Removes the listener from the store.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Returns `true` while the owning store is alive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}
