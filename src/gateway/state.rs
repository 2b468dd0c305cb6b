use crate::ledger::LedgerStore;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    pub store: LedgerStore,
}

impl AppState {
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }
}
