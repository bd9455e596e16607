//! Application State Management
//!
//! `AppState` is handed to the router once and cloned into every request.
//! Its only member is the document store handle, which is shared by all
//! concurrent requests; handlers extract it directly with
//! `State<DocumentStore>` through `FromRef`.

use axum::extract::FromRef;

use crate::backend::store::DocumentStore;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Process-wide document store handle
    pub store: DocumentStore,
}

impl AppState {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

impl FromRef<AppState> for DocumentStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
