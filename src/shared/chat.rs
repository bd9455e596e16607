//! Chat Request and Response Types
//!
//! Raw request bodies are deserialized into `SendMessageRequest` /
//! `ReadMessageRequest`, where every field is optional so that a missing field
//! can be reported with a precise message instead of a generic parse error.
//! `validate` then turns them into the typed commands the handlers work with.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::message::Message;
use crate::shared::validation::{ChatId, SenderId};

pub const SEND_MISSING_FIELDS: &str =
    "Either `chat_id` or `sender` was not provided in the request body.";
pub const SEND_INVALID_FIELDS: &str = "`chat_id` or `sender` must be an alphanumeric string.";
pub const SEND_MISSING_MESSAGE: &str = "A `message` was not provided in the request body.";
pub const READ_MISSING_FIELDS: &str =
    "A `chat_id` or `sender` was not provided in the request body.";
pub const READ_INVALID_FIELDS: &str =
    "`chat_id` or `sender` field must be an alphanumeric string.";

/// Body of `POST /message/send`
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct SendMessageRequest {
    pub chat_id: Option<String>,
    pub sender: Option<String>,
    /// Message text; may be empty but must be present
    pub message: Option<String>,
}

/// Body of `GET /message/read`
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct ReadMessageRequest {
    pub chat_id: Option<String>,
    /// When absent or empty, the whole chat log is returned
    pub sender: Option<String>,
}

/// A validated send command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub sender: SenderId,
    pub message: String,
}

/// A validated read command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadMessages {
    pub chat_id: ChatId,
    pub sender: Option<SenderId>,
}

/// Treat an empty string the same as a missing field
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl SendMessageRequest {
    /// Check presence and shape of every field
    ///
    /// # Errors
    ///
    /// Returns `SharedError::ValidationError` carrying the client-facing
    /// message for the first rule that fails.
    pub fn validate(self) -> Result<SendMessage, SharedError> {
        let (chat_id, sender) = match (non_empty(self.chat_id), non_empty(self.sender)) {
            (Some(chat_id), Some(sender)) => (chat_id, sender),
            (None, _) => return Err(SharedError::validation("chat_id", SEND_MISSING_FIELDS)),
            (_, None) => return Err(SharedError::validation("sender", SEND_MISSING_FIELDS)),
        };

        let chat_id = ChatId::parse(chat_id)
            .ok_or_else(|| SharedError::validation("chat_id", SEND_INVALID_FIELDS))?;
        let sender = SenderId::parse(sender)
            .ok_or_else(|| SharedError::validation("sender", SEND_INVALID_FIELDS))?;

        let message = self
            .message
            .ok_or_else(|| SharedError::validation("message", SEND_MISSING_MESSAGE))?;

        Ok(SendMessage {
            chat_id,
            sender,
            message,
        })
    }
}

impl ReadMessageRequest {
    /// Check presence and shape of `chat_id` and, when given, `sender`
    ///
    /// # Errors
    ///
    /// Returns `SharedError::ValidationError` carrying the client-facing
    /// message for the first rule that fails.
    pub fn validate(self) -> Result<ReadMessages, SharedError> {
        let chat_id = non_empty(self.chat_id)
            .ok_or_else(|| SharedError::validation("chat_id", READ_MISSING_FIELDS))?;
        let chat_id = ChatId::parse(chat_id)
            .ok_or_else(|| SharedError::validation("chat_id", READ_INVALID_FIELDS))?;

        let sender = match non_empty(self.sender) {
            Some(sender) => Some(
                SenderId::parse(sender)
                    .ok_or_else(|| SharedError::validation("sender", READ_INVALID_FIELDS))?,
            ),
            None => None,
        };

        Ok(ReadMessages { chat_id, sender })
    }
}

/// Response of a successful send
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SendMessageResponse {
    pub message: String,
}

impl SendMessageResponse {
    pub fn sent(sender: &SenderId, chat_id: &ChatId) -> Self {
        Self {
            message: format!(
                "Chat message from {} sent successfully to room {}.",
                sender, chat_id
            ),
        }
    }
}

/// One sender's thread inside a chat log
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SenderLog {
    pub sender: String,
    pub messages: Vec<Message>,
}

/// Response of a successful read
///
/// A single-sender read wraps the sender's list in an outer array, so
/// `messages` is `[[{message, timestamp}, ...]]`. Existing clients depend on
/// that shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ReadMessagesResponse {
    Sender {
        sender: String,
        messages: Vec<Vec<Message>>,
    },
    ChatLog {
        #[serde(rename = "chatLog")]
        chat_log: Vec<SenderLog>,
    },
}

impl ReadMessagesResponse {
    pub fn sender(sender: &SenderId, messages: Vec<Message>) -> Self {
        Self::Sender {
            sender: sender.to_string(),
            messages: vec![messages],
        }
    }

    pub fn chat_log(chat_log: Vec<SenderLog>) -> Self {
        Self::ChatLog { chat_log }
    }

    /// Total number of messages carried by this response
    pub fn message_count(&self) -> usize {
        match self {
            Self::Sender { messages, .. } => messages.iter().map(Vec::len).sum(),
            Self::ChatLog { chat_log } => chat_log.iter().map(|log| log.messages.len()).sum(),
        }
    }
}
