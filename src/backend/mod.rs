//! Backend Module
//!
//! All server-side code: an Axum HTTP server exposing the `/message`
//! endpoints on top of the document store.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - route configuration and router assembly
//! - **`chat`** - message send/read handlers and their storage operations
//! - **`store`** - the document store client
//! - **`middleware`** - security headers, CORS, panic recovery
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── chat/           - Message handlers and storage operations
//! ├── store/          - Document store client
//! ├── middleware/     - Request processing middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! HTTP request → router → middleware → handler → validation → document
//! store → JSON response. Validation failures return before any storage
//! call; storage failures are not retried.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Chat message handlers
pub mod chat;

/// Document store client
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use chat::handlers::{read_messages, send_message};
pub use error::BackendError;
pub use server::create_app;
pub use store::DocumentStore;
