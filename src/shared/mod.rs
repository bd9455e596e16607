//! Shared Module
//!
//! This module contains the wire types of the chat API: the stored message
//! shape, request and response bodies, and the identifier rules both the
//! server and any client agree on.
//!
//! Nothing in here touches storage or HTTP, so everything can be exercised
//! with plain unit tests.

/// Message data structure and timestamp formatting
pub mod message;

/// Identifier validation
pub mod validation;

/// Request, command and response types for the message endpoints
pub mod chat;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use chat::{
    ReadMessageRequest, ReadMessages, ReadMessagesResponse, SendMessage, SendMessageRequest,
    SendMessageResponse, SenderLog,
};
pub use error::SharedError;
pub use message::Message;
pub use validation::{ChatId, SenderId};
