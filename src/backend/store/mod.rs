//! Document Store Module
//!
//! A small hierarchical document database in the style of a managed
//! document store: collections hold documents, documents hold JSON fields
//! and may own sub-collections.
//!
//! # Architecture
//!
//! - **`document`** - Addressing (`CollectionRef`, `DocumentRef`), snapshots,
//!   field updates and the merge rules applied by `set_merge`
//! - **`sqlite`** - `DocumentStore`, the SQLite-backed client shared by all
//!   request handlers
//! - **`error`** - `StoreError`
//!
//! # Layout
//!
//! Every document is one row keyed by its parent collection path and its id,
//! so `chat_rooms/room1/messages/alice` is stored as
//! (`chat_rooms/room1/messages`, `alice`). Parents and children are
//! independent rows: a sub-collection document may exist without its parent
//! and the other way around.

/// Paths, snapshots and merge semantics
pub mod document;

/// SQLite-backed store client
pub mod sqlite;

/// Store error types
pub mod error;

pub use document::{CollectionRef, DocumentRef, DocumentSnapshot, FieldValue, Fields, WriteResult};
pub use error::StoreError;
pub use sqlite::DocumentStore;
