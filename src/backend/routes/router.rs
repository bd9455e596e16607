//! Router Configuration
//!
//! Combines the message routes with the middleware chain every response
//! passes through. Layers listed later wrap the earlier ones, so a request
//! meets them bottom-up:
//!
//! 1. request tracing
//! 2. panic recovery (500 with the uniform error body)
//! 3. CORS
//! 4. gzip compression
//! 5. security headers

use axum::{http::StatusCode, middleware::from_fn, response::IntoResponse, Json, Router};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, compression::CompressionLayer, trace::TraceLayer};

use crate::backend::middleware::{cors_layer, handle_panic, security_headers};
use crate::backend::routes::message_routes::{message_routes, MESSAGE_PREFIX};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes and middleware configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let routes = Router::new()
        .nest(MESSAGE_PREFIX, message_routes())
        .fallback(not_found);

    with_middleware(routes).with_state(app_state)
}

/// Wrap every route of `router` in the middleware chain
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(from_fn(security_headers))
        .layer(CompressionLayer::new())
        .layer(cors_layer())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        routing::get,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_panicking_handler_gets_uniform_body() {
        let app = with_middleware(Router::new().route("/explode", get(explode)));

        let response = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({ "message": "Error encountered", "error": "handler exploded" })
        );
    }
}
