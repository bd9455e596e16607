//! Chat Handlers Module
//!
//! Axum handlers for the message endpoints.
//!
//! - **`send`** - `POST /message/send`
//! - **`read`** - `GET /message/read`
//!
//! Both parse the JSON body into a typed request, validate it into a command
//! and only then talk to the document store. A rejected request never
//! touches storage.

/// Send handler
pub mod send;

/// Read handler
pub mod read;

pub use read::read_messages;
pub use send::send_message;
