//! Test server helpers

use axum::http::StatusCode;
use axum_test::TestServer;
use roomchat::backend::server::create_app_with_store;
use roomchat::backend::store::DocumentStore;
use serde_json::{json, Value};

use super::database::create_test_store;

/// A server around a fresh store, plus a handle to that store
pub async fn create_test_server() -> (TestServer, DocumentStore) {
    let store = create_test_store().await;
    let app = create_app_with_store(store.clone());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, store)
}

pub fn send_body(chat_id: &str, sender: &str, message: &str) -> Value {
    json!({ "chat_id": chat_id, "sender": sender, "message": message })
}

/// Send a message and assert it was accepted
pub async fn send_ok(server: &TestServer, chat_id: &str, sender: &str, message: &str) {
    let response = server
        .post("/message/send")
        .json(&send_body(chat_id, sender, message))
        .await;
    assert_eq!(
        response.status_code(),
        StatusCode::OK,
        "send failed: {}",
        response.text()
    );
}
