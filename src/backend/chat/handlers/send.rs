//! Send Handler
//!
//! Implements `POST /message/send`.
//!
//! # Process
//!
//! 1. Parse and validate `chat_id`, `sender` and `message`
//! 2. Create the chat room document if it does not exist yet
//! 3. Stamp the message with the server clock
//! 4. Merge it into the sender's message list with an array union

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::backend::chat::db;
use crate::backend::error::{BackendError, Operation};
use crate::backend::store::DocumentStore;
use crate::shared::{Message, SendMessageRequest, SendMessageResponse};

/// Send a message to a chat room
///
/// # Errors
///
/// * `400 Bad Request` - body is not JSON, or a field is missing or not alphanumeric
/// * `500 Internal Server Error` - the document store rejected a read or write
///
/// # Example Request
///
/// ```http
/// POST /message/send HTTP/1.1
/// Content-Type: application/json
///
/// { "chat_id": "room1", "sender": "alice", "message": "hi" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "Chat message from alice sent successfully to room room1." }
/// ```
pub async fn send_message(
    State(store): State<DocumentStore>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<SendMessageResponse>, BackendError> {
    let Json(request) = payload?;
    let command = request.validate()?;

    let fail = |e| BackendError::operation_failed(Operation::Send, command.chat_id.as_str(), e);

    db::ensure_chat_room(&store, &command.chat_id)
        .await
        .map_err(fail)?;

    let message = Message::new(command.message.as_str());
    db::append_message(&store, &command.chat_id, &command.sender, &message)
        .await
        .map_err(fail)?;

    tracing::info!(
        "Successfully sent chat message to room {}: {}",
        command.chat_id,
        message.message
    );

    Ok(Json(SendMessageResponse::sent(&command.sender, &command.chat_id)))
}
