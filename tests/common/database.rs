//! Document store fixtures

use roomchat::backend::chat::db::{CHAT_ROOMS, MESSAGES_COLLECTION};
use roomchat::backend::store::{CollectionRef, DocumentStore};

/// Open a fresh, private in-memory store
pub async fn create_test_store() -> DocumentStore {
    DocumentStore::in_memory()
        .await
        .expect("Failed to open in-memory document store")
}

/// Number of chat room documents in the store
pub async fn chat_room_count(store: &DocumentStore) -> usize {
    store
        .list_documents(&CollectionRef::root(CHAT_ROOMS))
        .await
        .expect("Failed to list chat rooms")
        .len()
}

/// Ids of the sender documents under a chat room
pub async fn sender_ids(store: &DocumentStore, chat_id: &str) -> Vec<String> {
    let senders = CollectionRef::root(CHAT_ROOMS)
        .doc(chat_id)
        .collection(MESSAGES_COLLECTION);
    store
        .list_documents(&senders)
        .await
        .expect("Failed to list senders")
        .into_iter()
        .map(|doc| doc.id)
        .collect()
}
