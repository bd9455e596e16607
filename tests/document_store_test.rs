//! Document store integration tests
//!
//! Persistence across reopen and convergence of concurrent appends.

#[macro_use]
mod common;

use roomchat::backend::chat::db::{append_message, ensure_chat_room, load_sender_messages};
use roomchat::backend::store::DocumentStore;
use roomchat::shared::{ChatId, Message, SenderId};

use common::{chat_room_count, create_test_store};

fn ids() -> (ChatId, SenderId) {
    (ChatId::parse("room1").unwrap(), SenderId::parse("alice").unwrap())
}

#[tokio::test]
async fn test_messages_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("roomchat.db").display());
    let (chat_id, sender) = ids();

    let store = assert_ok!(DocumentStore::connect(&url).await);
    ensure_chat_room(&store, &chat_id).await.unwrap();
    append_message(&store, &chat_id, &sender, &Message::new("persisted")).await.unwrap();
    store.close().await;

    let reopened = assert_ok!(DocumentStore::connect(&url).await);
    let messages = load_sender_messages(&reopened, &chat_id, &sender)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message, "persisted");
    assert_eq!(chat_room_count(&reopened).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_converge() {
    let store = create_test_store().await;
    let (chat_id, sender) = ids();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = store.clone();
            let (chat_id, sender) = (chat_id.clone(), sender.clone());
            tokio::spawn(async move {
                ensure_chat_room(&store, &chat_id).await?;
                append_message(&store, &chat_id, &sender, &Message::new(format!("message {}", i)))
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert_ok!(handle.await.unwrap());
    }

    let messages = load_sender_messages(&store, &chat_id, &sender)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(messages.len(), 20);
    assert_eq!(chat_room_count(&store).await, 1);
}
