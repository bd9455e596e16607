//! Route Configuration Module
//!
//! - **`router`** - main router creation and the middleware chain
//! - **`message_routes`** - the `/message` endpoints
//!
//! # Routes
//!
//! - `POST /message/send` - append a message to a sender's list in a room
//! - `GET /message/read` - read one sender's messages or a room's chat log
//!
//! Anything else falls through to a JSON 404.

/// Main router creation
pub mod router;

/// Message endpoints
pub mod message_routes;

// Re-export commonly used functions
pub use router::create_router;
