//! Panic Recovery
//!
//! Used with `tower_http::catch_panic::CatchPanicLayer::custom`. A panic in
//! a handler is logged and answered with the same 500 body as a storage
//! failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;

use crate::backend::error::conversion::ERROR_ENCOUNTERED;

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": ERROR_ENCOUNTERED, "error": detail })),
    )
        .into_response()
}
