//! # Connection State
//!
//! The single mutable cell holding the session's active signer, plus explicit
//! observers that fire on every write.
//!
//! ## Lifecycle
//!
//! ```text
//! Disconnected ──connect(signer)──▶ Connected(signer) ──connect(other)──▶ Connected(other)
//! ```
//!
//! There is no disconnect transition; a fresh store is the only way back to
//! `Disconnected`. A second successful connection replaces the first signer
//! (last write wins) and the replaced signer is dropped.
//!
//! Execution is single-threaded (UI callbacks), so the store uses `Rc` and `RefCell`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::signer::ActiveSigner;

/// Whether a signer is available.
#[derive(Clone, Debug, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected(ActiveSigner),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected(_))
    }

    pub fn signer(&self) -> Option<&ActiveSigner> {
        match self {
            ConnectionState::Connected(signer) => Some(signer),
            ConnectionState::Disconnected => None,
        }
    }
}

/// Handle returned by [`ConnectionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&ConnectionState)>;

#[derive(Default)]
struct StoreInner {
    state: RefCell<ConnectionState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// Shared handle to the connection cell. Clones observe and mutate the same cell.
#[derive(Clone, Default)]
pub struct ConnectionStore {
    inner: Rc<StoreInner>,
}

impl ConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ConnectionState {
        self.inner.state.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.state.borrow().is_connected()
    }

    pub fn signer(&self) -> Option<ActiveSigner> {
        self.inner.state.borrow().signer().cloned()
    }

    /// Store a signer and notify every observer.
    pub fn connect(&self, signer: ActiveSigner) {
        tracing::info!(
            kind = %signer.kind(),
            address = %signer.address().map(|a| shared::truncate_address(&a)).unwrap_or_default(),
            "wallet connected"
        );

        let previous = self.inner.state.replace(ConnectionState::Connected(signer));
        if previous.is_connected() {
            tracing::debug!("replaced an existing signer");
        }
        drop(previous);

        self.notify();
    }

    /// Register an observer. It is not called for the current state.
    pub fn subscribe(&self, listener: impl Fn(&ConnectionState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Remove an observer. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        // Listeners may read or write the store, so nothing stays borrowed while they run
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            // Read per listener: an earlier listener may have written a newer signer
            let state = self.state();
            listener(&state);
        }
    }
}

impl std::fmt::Debug for ConnectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionStore")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::test_support::MockProvider;
    use crate::signer::EphemeralKeySigner;

    #[test]
    fn test_starts_disconnected() {
        let store = ConnectionStore::new();
        assert!(!store.is_connected());
        assert!(store.signer().is_none());
    }

    #[test]
    fn test_connect_notifies_with_new_state() {
        let store = ConnectionStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        store.subscribe(move |state| sink.borrow_mut().push(state.is_connected()));

        store.connect(ActiveSigner::external(MockProvider::on_chain(1, "0x1"), "test"));

        assert!(store.is_connected());
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn test_clones_share_the_cell() {
        let store = ConnectionStore::new();
        let writer = store.clone();

        writer.connect(ActiveSigner::ephemeral(EphemeralKeySigner::random()));

        assert!(store.is_connected());
    }

    #[test]
    fn test_last_write_wins_and_drops_previous_signer() {
        let store = ConnectionStore::new();

        let first = Rc::new(EphemeralKeySigner::random());
        let first_weak = Rc::downgrade(&first);
        store.connect(ActiveSigner::Ephemeral(first));

        let second = EphemeralKeySigner::random();
        let second_address = second.address().to_string();
        store.connect(ActiveSigner::ephemeral(second));

        assert!(first_weak.upgrade().is_none());
        assert_eq!(store.signer().unwrap().address(), Some(second_address));
    }

    #[test]
    fn test_unsubscribe() {
        let store = ConnectionStore::new();
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));
        store.connect(ActiveSigner::ephemeral(EphemeralKeySigner::random()));
        store.unsubscribe(id);
        store.connect(ActiveSigner::ephemeral(EphemeralKeySigner::random()));

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_may_read_and_write_store() {
        let store = ConnectionStore::new();
        let reentrant = store.clone();
        let writes = Rc::new(Cell::new(0));

        let counter = writes.clone();
        store.subscribe(move |state| {
            assert!(reentrant.is_connected());
            assert!(state.is_connected());
            if counter.get() == 0 {
                counter.set(1);
                reentrant.connect(ActiveSigner::ephemeral(EphemeralKeySigner::random()));
            }
        });

        store.connect(ActiveSigner::ephemeral(EphemeralKeySigner::random()));
        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn test_later_listeners_see_write_made_by_earlier_listener() {
        let store = ConnectionStore::new();
        let reentrant = store.clone();
        let rewritten = Rc::new(Cell::new(false));

        let flag = rewritten.clone();
        store.subscribe(move |_| {
            if !flag.get() {
                flag.set(true);
                reentrant.connect(ActiveSigner::ephemeral(EphemeralKeySigner::random()));
            }
        });

        let last_seen = Rc::new(RefCell::new(None));
        let sink = last_seen.clone();
        store.subscribe(move |state| {
            *sink.borrow_mut() = state.signer().and_then(ActiveSigner::address);
        });

        store.connect(ActiveSigner::ephemeral(EphemeralKeySigner::random()));

        assert!(rewritten.get());
        let current = store.signer().and_then(|signer| signer.address());
        assert_eq!(*last_seen.borrow(), current);
    }
}
