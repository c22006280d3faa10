use std::sync::Arc;

use tokio::sync::watch;

use crate::actions::{Action, RequestId};
use crate::reducer::reduce;
use crate::state::ViewState;

/// Store - holds the view state and runs every action through the reducer
///
/// Clones share the same state. Reduction happens inside the watch
/// channel's write lock, so concurrent dispatches are applied one at a
/// time and subscribers only ever observe whole states.
#[derive(Clone)]
pub struct Store {
    state_tx: Arc<watch::Sender<ViewState>>,
}

impl Store {
    pub fn new(initial_state: ViewState) -> Self {
        let (state_tx, _) = watch::channel(initial_state);
        Self {
            state_tx: Arc::new(state_tx),
        }
    }

    /// Get a copy of the current state
    pub fn state(&self) -> ViewState {
        self.state_tx.borrow().clone()
    }

    /// Id of the request the state currently belongs to
    pub fn live_request(&self) -> RequestId {
        self.state_tx.borrow().request
    }

    /// Subscribe to state changes
    ///
    /// The receiver starts at the current state; intermediate states may be
    /// skipped when the subscriber is slower than the dispatchers.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    /// Process an action through the reducer
    ///
    /// Subscribers are only notified when the state actually changed.
    pub fn dispatch(&self, action: Action) {
        log::debug!("Dispatching {}", action.summary());

        self.state_tx.send_if_modified(|state| {
            let next = reduce(state.clone(), &action);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}
