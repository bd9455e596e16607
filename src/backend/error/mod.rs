//! Backend Error Module
//!
//! This module defines the errors returned by the HTTP handlers and how they
//! are turned into responses.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` and its constructors
//! - **`conversion`** - `IntoResponse` and conversions from lower layers
//!
//! # Error Taxonomy
//!
//! - `InvalidRequest` - malformed, missing or non-alphanumeric fields (400)
//! - `PayloadRejected` - body that could not be read, e.g. too large (413)
//! - `NotFound` - chat room or sender absent on read (404)
//! - `OperationFailed` - the document store rejected an operation (500)
//!
//! Validation errors short-circuit inside the handler before any storage
//! call. Storage errors are never retried.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, NotFound, Operation};
