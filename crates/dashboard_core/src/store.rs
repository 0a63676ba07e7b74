//! The single state container shared by every view.

use crossbeam_channel::{unbounded, Receiver, Sender};
use shared::{
    protocol::Action,
    state::{AppState, Stats, WalletState},
};
use tracing::{debug, warn};

use crate::reducer::reduce;

/// Capability to request state changes. Views receive this instead of the store.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreEvent {
    pub revision: u64,
    pub action: &'static str,
    pub changed: bool,
}

/// Everything the reducer can change, minus audit contents. Audits are only
/// ever prepended, so their count stands in for the list.
#[derive(PartialEq)]
struct Fingerprint {
    audits: usize,
    stats: Stats,
    wallet: WalletState,
    modals: [bool; 3],
}

impl Fingerprint {
    fn of(state: &AppState) -> Self {
        Self {
            audits: state.audits.len(),
            stats: state.stats,
            wallet: state.wallet.clone(),
            modals: [
                state.is_upgrade_modal_open,
                state.is_audit_modal_open,
                state.is_wallet_modal_open,
            ],
        }
    }
}

pub struct Store {
    state: AppState,
    revision: u64,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: initial,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `action` through the reducer and notifies subscribers.
    /// Returns whether the state changed.
    pub fn apply(&mut self, action: Action) -> bool {
        let name = action.name();
        let before = Fingerprint::of(&self.state);
        self.state = reduce(std::mem::take(&mut self.state), action);
        let changed = Fingerprint::of(&self.state) != before;
        self.revision += 1;

        debug!(
            action = name,
            revision = self.revision,
            changed,
            audits = self.state.audits.len(),
            "dispatched action"
        );
        if self.state.open_modal_count() > 1 {
            warn!(
                action = name,
                open_modals = self.state.open_modal_count(),
                "more than one modal is visible"
            );
        }

        let event = StoreEvent {
            revision: self.revision,
            action: name,
            changed,
        };
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
        changed
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn into_state(self) -> AppState {
        self.state
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        self.apply(action);
    }
}
