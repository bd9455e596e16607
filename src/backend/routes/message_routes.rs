//! Message Route Handlers
//!
//! Routes mounted under the `/message` prefix.

use axum::{routing, Router};

use crate::backend::chat::handlers::{read_messages, send_message};
use crate::backend::server::state::AppState;

/// Path prefix of the message endpoints
pub const MESSAGE_PREFIX: &str = "/message";

/// Configure message routes, relative to `MESSAGE_PREFIX`
///
/// - `POST /send` - send a message
/// - `GET /read` - read messages
pub fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/send", routing::post(send_message))
        .route("/read", routing::get(read_messages))
}
