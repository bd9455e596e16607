//! Store Error Types

use thiserror::Error;

/// Errors returned by `DocumentStore` operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database rejected the operation
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migrations could not be applied
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Document data could not be encoded or decoded as JSON
    #[error("invalid document data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `create` was called for a document that already exists
    #[error("document already exists: {path}")]
    AlreadyExists { path: String },
}
