//! The store: dispatch entry point and subscriber notification.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use super::persist::{self, PersistedState};
use super::root::{reduce, Action, RootState};

type Subscriber = Box<dyn Fn(&RootState) + Send + Sync>;

/// Application state container.
///
/// Cheap to clone (all clones share the same state). Every mutation
/// flows through [`Store::dispatch`]; there is no other write path.
/// Reads hand out a snapshot clone of the tree.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<RootState>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl Store {
    /// A store starting from the fixed initial state.
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    /// A store starting from `state`.
    pub fn with_state(state: RootState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                subscribers: RwLock::new(Vec::new()),
            }),
        }
    }

    /// A store whose packs slice is restored from the JSON state file at
    /// `path` (when present and well-formed), and saved back after every
    /// dispatch for the lifetime of the store.
    pub fn with_persistence(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let mut state = RootState::default();
        if let Some(persisted) = persist::load_state(&path) {
            state.packs = persisted.packs;
        }

        let store = Self::with_state(state);
        store.subscribe(move |state| {
            let snapshot = PersistedState {
                packs: state.packs.clone(),
            };
            if let Err(err) = persist::save_state(&path, &snapshot) {
                tracing::warn!(path = %path.display(), %err, "failed to persist state");
            }
        });

        store
    }

    /// Current state snapshot.
    pub fn state(&self) -> RootState {
        self.inner.state.read().clone()
    }

    /// Reduce `action` into the tree, then notify every subscriber with
    /// the new state, synchronously, on the calling thread.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let new_state = {
            let mut state = self.inner.state.write();
            let next = reduce(state.clone(), action.into());
            *state = next.clone();
            next
        };

        for subscriber in self.inner.subscribers.read().iter() {
            subscriber(&new_state);
        }
    }

    /// Register a callback invoked after every dispatch. Subscriptions
    /// live as long as the store; there is no unsubscribe.
    pub fn subscribe(&self, subscriber: impl Fn(&RootState) + Send + Sync + 'static) {
        self.inner.subscribers.write().push(Box::new(subscriber));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packs::PacksAction;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn dispatch_updates_state() {
        let store = Store::new();
        store.dispatch(PacksAction::SetPage(4));
        assert_eq!(store.state().packs.page, 4);
    }

    #[test]
    fn subscribers_see_every_dispatch() {
        let store = Store::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let seen = calls.clone();
        store.subscribe(move |state| {
            assert!(state.packs.page >= 1);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(PacksAction::SetPage(2));
        store.dispatch(PacksAction::SetPageCount(20));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        other.dispatch(PacksAction::SetPage(7));
        assert_eq!(store.state().packs.page, 7);
    }
}
