//! roomchat - Main Library
//!
//! roomchat is a small HTTP service for sending and reading text messages
//! scoped to a named chat room and sender. Messages are persisted in a
//! hierarchical document store: every chat room is a document, and every
//! sender inside it owns a document holding that sender's message list.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between server and clients
//!   - Message structure and timestamp format
//!   - Request/response bodies and validation into typed commands
//!   - Error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and middleware
//!   - Message send/read handlers
//!   - SQLite-backed document store
//!
//! # Usage
//!
//! ```rust,no_run
//! use roomchat::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The only state shared between requests is the `DocumentStore` handle,
//! which is `Clone + Send + Sync`. Handlers hold no locks of their own.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
