//! Document Store Operations for Chat Rooms and Messages
//!
//! Each function maps to at most one store round trip.

use serde_json::Value;

use crate::backend::store::{
    CollectionRef, DocumentRef, DocumentSnapshot, DocumentStore, FieldValue, Fields, StoreError,
    WriteResult,
};
use crate::shared::{ChatId, Message, SenderId, SenderLog};

/// Top-level collection of chat rooms
pub const CHAT_ROOMS: &str = "chat_rooms";
/// Sub-collection of a chat room holding one document per sender
pub const MESSAGES_COLLECTION: &str = "messages";
/// Field of a sender document holding the message list
pub const MESSAGES_FIELD: &str = "messages";

pub fn chat_room_ref(chat_id: &ChatId) -> DocumentRef {
    CollectionRef::root(CHAT_ROOMS).doc(chat_id.as_str())
}

pub fn senders_ref(chat_id: &ChatId) -> CollectionRef {
    chat_room_ref(chat_id).collection(MESSAGES_COLLECTION)
}

pub fn sender_ref(chat_id: &ChatId, sender: &SenderId) -> DocumentRef {
    senders_ref(chat_id).doc(sender.as_str())
}

/// Look up a chat room
pub async fn find_chat_room(
    store: &DocumentStore,
    chat_id: &ChatId,
) -> Result<Option<DocumentSnapshot>, StoreError> {
    store.get(&chat_room_ref(chat_id)).await
}

/// Make sure the chat room document exists
///
/// Returns `true` if this call created it. Creation goes through the store's
/// create-if-absent primitive, so two first writers racing on the same room
/// both succeed.
pub async fn ensure_chat_room(store: &DocumentStore, chat_id: &ChatId) -> Result<bool, StoreError> {
    let room = chat_room_ref(chat_id);
    if store.get(&room).await?.is_some() {
        return Ok(false);
    }

    let created = store.create_if_absent(&room, Fields::new()).await?;
    if created {
        tracing::info!("Created chat room {}", chat_id);
    }
    Ok(created)
}

/// Append a message to the sender's list in a chat room
///
/// Uses a merge write with an array union, so earlier messages are never
/// replaced.
pub async fn append_message(
    store: &DocumentStore,
    chat_id: &ChatId,
    sender: &SenderId,
    message: &Message,
) -> Result<WriteResult, StoreError> {
    let element = serde_json::to_value(message)?;
    store
        .set_merge(
            &sender_ref(chat_id, sender),
            [(MESSAGES_FIELD.to_string(), FieldValue::array_union([element]))],
        )
        .await
}

/// All messages from one sender, `None` if the sender has no document
pub async fn load_sender_messages(
    store: &DocumentStore,
    chat_id: &ChatId,
    sender: &SenderId,
) -> Result<Option<Vec<Message>>, StoreError> {
    store
        .get(&sender_ref(chat_id, sender))
        .await?
        .map(|snapshot| messages_of(&snapshot))
        .transpose()
}

/// Every sender's messages in a chat room, ordered by sender id
pub async fn load_chat_log(
    store: &DocumentStore,
    chat_id: &ChatId,
) -> Result<Vec<SenderLog>, StoreError> {
    store
        .list_documents(&senders_ref(chat_id))
        .await?
        .into_iter()
        .map(|snapshot| {
            messages_of(&snapshot).map(|messages| SenderLog {
                sender: snapshot.id,
                messages,
            })
        })
        .collect()
}

/// Decode the message list of a sender document
///
/// A document without the field holds no messages.
fn messages_of(snapshot: &DocumentSnapshot) -> Result<Vec<Message>, StoreError> {
    match snapshot.get(MESSAGES_FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value.clone())?),
    }
}
