use std::sync::Arc;

use callgrid_engine::{MemoryStore, Scheduler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scheduler: Arc<Scheduler<MemoryStore>>,
}

impl AppState {
    pub fn new(store: MemoryStore) -> Self {
        AppState {
            scheduler: Arc::new(Scheduler::new(store)),
        }
    }
}
