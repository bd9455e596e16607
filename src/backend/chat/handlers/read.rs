//! Read Handler
//!
//! Implements `GET /message/read`. The request carries a JSON body even
//! though it is a GET.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::backend::chat::db;
use crate::backend::error::{BackendError, NotFound, Operation};
use crate::backend::store::DocumentStore;
use crate::shared::{ReadMessageRequest, ReadMessagesResponse};

/// Read one sender's messages, or the whole chat log of a room
///
/// With a `sender`, responds `{ "sender": ..., "messages": [[...]] }`.
/// Without one, responds `{ "chatLog": [{ "sender": ..., "messages": [...] }] }`;
/// a room nobody has written to yet gives an empty `chatLog`.
///
/// # Errors
///
/// * `400 Bad Request` - body is not JSON, or a field is missing or not alphanumeric
/// * `404 Not Found` - the chat room, or the sender within it, does not exist
/// * `500 Internal Server Error` - the document store rejected a read
pub async fn read_messages(
    State(store): State<DocumentStore>,
    payload: Result<Json<ReadMessageRequest>, JsonRejection>,
) -> Result<Json<ReadMessagesResponse>, BackendError> {
    let Json(request) = payload?;
    let query = request.validate()?;
    let chat_id = &query.chat_id;

    let fail = |e| BackendError::operation_failed(Operation::Read, chat_id.as_str(), e);

    if db::find_chat_room(&store, chat_id).await.map_err(fail)?.is_none() {
        return Err(NotFound::ChatRoom {
            chat_id: chat_id.to_string(),
        }
        .into());
    }

    let response = match &query.sender {
        Some(sender) => {
            let messages = db::load_sender_messages(&store, chat_id, sender)
                .await
                .map_err(fail)?
                .ok_or_else(|| NotFound::Sender {
                    sender: sender.to_string(),
                    chat_id: chat_id.to_string(),
                })?;

            tracing::info!(
                "Successfully found {} chat messages from {} to room {}.",
                messages.len(),
                sender,
                chat_id
            );
            ReadMessagesResponse::sender(sender, messages)
        }
        None => {
            let chat_log = db::load_chat_log(&store, chat_id).await.map_err(fail)?;
            let response = ReadMessagesResponse::chat_log(chat_log);

            tracing::info!(
                "Successfully found {} total chat messages to room {}.",
                response.message_count(),
                chat_id
            );
            response
        }
    };

    Ok(Json(response))
}
