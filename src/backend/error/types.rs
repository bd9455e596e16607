//! Backend Error Types

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// What the handler was doing when the store failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Send,
    Read,
}

impl Operation {
    fn describe(self) -> &'static str {
        match self {
            Self::Send => "send a message to",
            Self::Read => "read messages from",
        }
    }
}

/// A resource missing on read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("You specified an invalid `chat_id`. This chat room does not exist.")]
    ChatRoom { chat_id: String },

    #[error("There are no messages from {sender} in chat room {chat_id}.")]
    Sender {
        sender: String,
        chat_id: String,
    },
}

/// Errors returned by the message handlers
///
/// Each variant maps to one HTTP status; see `status_code`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed body or a field failing validation
    #[error("{message}")]
    InvalidRequest {
        /// Human-readable reason returned to the client
        message: String,
    },

    /// Body refused before it could be parsed, e.g. over the size limit
    #[error("{message}")]
    PayloadRejected {
        /// Status reported by the body extractor
        status: StatusCode,
        message: String,
    },

    /// Chat room or sender does not exist
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// The document store rejected an operation on `chat_id`
    #[error("Failed to {} chat room \"{chat_id}\": {source}", .operation.describe())]
    OperationFailed {
        operation: Operation,
        chat_id: String,
        #[source]
        source: StoreError,
    },
}

impl BackendError {
    /// Create a new invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an error for a body the extractor refused to read
    pub fn payload_rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::PayloadRejected {
            status,
            message: message.into(),
        }
    }

    /// Wrap a store failure with the chat room it concerned
    pub fn operation_failed(
        operation: Operation,
        chat_id: impl Into<String>,
        source: StoreError,
    ) -> Self {
        Self::OperationFailed {
            operation,
            chat_id: chat_id.into(),
            source,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadRejected { status, .. } => *status,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
