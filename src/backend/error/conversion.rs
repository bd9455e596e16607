//! Error Conversion
//!
//! Turns `BackendError` into HTTP responses and lifts errors from the
//! request-parsing and validation layers into `BackendError`.
//!
//! # Response Format
//!
//! ```json
//! { "error": "reason" }                                       // 400, 413, 404 chat room
//! { "message": "There are no messages from ..." }             // 404 sender
//! { "message": "Error encountered", "error": "Failed to ..." } // 500
//! ```

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::{BackendError, NotFound};
use crate::shared::SharedError;

/// Message of the uniform 500 body
pub const ERROR_ENCOUNTERED: &str = "Error encountered";

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            Self::InvalidRequest { message } | Self::PayloadRejected { message, .. } => {
                json!({ "error": message })
            }
            Self::NotFound(missing @ NotFound::ChatRoom { .. }) => {
                json!({ "error": missing.to_string() })
            }
            Self::NotFound(missing @ NotFound::Sender { .. }) => {
                json!({ "message": missing.to_string() })
            }
            Self::OperationFailed { .. } => {
                tracing::error!("{:?}", self);
                json!({ "message": ERROR_ENCOUNTERED, "error": self.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        tracing::warn!("Rejected request, invalid `{}`: {}", err.field(), err);
        Self::invalid_request(err.to_string())
    }
}

/// Syntax, type and content-type problems are the client's malformed
/// request (400). Failures to read the body at all, such as the size limit,
/// keep the extractor's own status.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        match rejection {
            JsonRejection::BytesRejection(_) => {
                Self::payload_rejected(rejection.status(), rejection.body_text())
            }
            _ => Self::invalid_request(rejection.body_text()),
        }
    }
}
