//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - `ServerConfig` loading and the store connection
//! - **`init`** - app creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store Connection**: opens the document store and runs migrations
//! 3. **State Creation**: wraps the store handle in `AppState`
//! 4. **Router Creation**: routes plus the middleware chain

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_app_with_store};
pub use state::AppState;
