//! Chat Backend Module
//!
//! Server-side chat functionality: the two message handlers and the
//! document-store operations they are built on.
//!
//! # Architecture
//!
//! - **`handlers`** - `POST /message/send` and `GET /message/read`
//! - **`db`** - chat rooms and sender message lists as nested documents
//!
//! # Persisted Layout
//!
//! ```text
//! chat_rooms/{chat_id}                      chat room, empty fields
//! chat_rooms/{chat_id}/messages/{sender}    { "messages": [Message, ...] }
//! ```

/// Message send/read handlers
pub mod handlers;

/// Document store operations for chat rooms and messages
pub mod db;

/// Re-export commonly used handlers
pub use handlers::{read_messages, send_message};
