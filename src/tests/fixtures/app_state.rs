use crate::modules::bookings::adapters::outbound::backend_in_memory::InMemoryBackend;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shell::state::AppState;
use std::sync::Arc;

/// App state over in-memory adapters. The backend is returned so tests can inspect it.
pub fn make_app_state(
    store: InMemoryKeyValueStore,
    backend: InMemoryBackend,
) -> (AppState, Arc<InMemoryBackend>) {
    let backend = Arc::new(backend);
    let state = AppState::new(Arc::new(store), backend.clone(), backend.clone());
    (state, backend)
}
