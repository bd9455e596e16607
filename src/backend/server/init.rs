//! Server Initialization
//!
//! Builds the Axum application: opens the document store once, wraps the
//! handle in `AppState` and assembles the router.

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{DocumentStore, StoreError};

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the document store cannot be opened or migrated. The server
/// has nothing to serve without it.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing roomchat backend server");

    let store = load_database(config).await?;
    Ok(create_app_with_store(store))
}

/// Create the application around an already opened store
pub fn create_app_with_store(store: DocumentStore) -> Router<()> {
    let app = create_router(AppState::new(store));
    tracing::info!("Router configured");
    app
}
