//! Middleware Module
//!
//! HTTP middleware applied by `routes::router::create_router` to every
//! request.
//!
//! - **`security`** - hardening response headers
//! - **`cors`** - CORS policy reflecting the caller's origin
//! - **`panic`** - turns a panicking handler into the uniform 500 body
//!
//! Tracing and compression come straight from `tower-http` and need no
//! glue of their own.

pub mod cors;
pub mod panic;
pub mod security;

pub use cors::cors_layer;
pub use panic::handle_panic;
pub use security::security_headers;
