//! SQLite-backed Document Store
//!
//! `DocumentStore` is the single store handle of the process. It is cheap to
//! clone (the pool is reference counted) and safe to share between request
//! handlers.
//!
//! The pool holds exactly one connection. Every statement, and every
//! read-modify-write transaction issued by `set_merge`, therefore runs
//! serialized, which is what makes concurrent array unions on one document
//! converge into a single list.

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::backend::store::document::{
    merge_fields, CollectionRef, DocumentRef, DocumentSnapshot, FieldValue, Fields, WriteResult,
};
use crate::backend::store::error::StoreError;

/// In-memory database URL understood by `DocumentStore::connect`
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Handle to the document database
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    document_id: String,
    data: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for DocumentSnapshot {
    type Error = StoreError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.document_id,
            data: serde_json::from_str(&row.data)?,
            create_time: row.created_at,
            update_time: row.updated_at,
        })
    }
}

impl DocumentStore {
    /// Open the database at `url` and install the schema
    ///
    /// File databases are created if missing. `sqlite::memory:` gives a
    /// private, empty database that lives as long as the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the URL is invalid or the database
    /// cannot be opened, `StoreError::Migration` if the schema cannot be
    /// installed.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // The idle/lifetime limits are disabled so an in-memory database is
        // never dropped together with its only connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("Document store ready at {}", url);

        Ok(Self { pool })
    }

    /// Open a fresh in-memory store
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect(IN_MEMORY_URL).await
    }

    /// Reference to a top-level collection
    pub fn collection(&self, name: &str) -> CollectionRef {
        CollectionRef::root(name)
    }

    /// Read a document, `None` if it does not exist
    pub async fn get(&self, doc: &DocumentRef) -> Result<Option<DocumentSnapshot>, StoreError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT document_id, data, created_at, updated_at
            FROM documents
            WHERE collection_path = ? AND document_id = ?
            "#,
        )
        .bind(doc.parent().path())
        .bind(doc.id())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DocumentSnapshot::try_from).transpose()
    }

    /// Create a document
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if the document is already there.
    pub async fn create(&self, doc: &DocumentRef, data: Fields) -> Result<WriteResult, StoreError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO documents (collection_path, document_id, data, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(doc.parent().path())
        .bind(doc.id())
        .bind(serde_json::to_string(&data)?)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(WriteResult { write_time: now }),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::AlreadyExists { path: doc.path() })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create a document unless it already exists
    ///
    /// Returns `true` if this call created it. Never fails because of a
    /// concurrent creator.
    pub async fn create_if_absent(
        &self,
        doc: &DocumentRef,
        data: Fields,
    ) -> Result<bool, StoreError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO documents (collection_path, document_id, data, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (collection_path, document_id) DO NOTHING
            "#,
        )
        .bind(doc.parent().path())
        .bind(doc.id())
        .bind(serde_json::to_string(&data)?)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Write fields into a document, creating it if needed
    ///
    /// Fields not named in `updates` keep their stored values; see
    /// `merge_fields` for the per-field rules.
    pub async fn set_merge(
        &self,
        doc: &DocumentRef,
        updates: impl IntoIterator<Item = (String, FieldValue)>,
    ) -> Result<WriteResult, StoreError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<String> = sqlx::query_scalar(
            "SELECT data FROM documents WHERE collection_path = ? AND document_id = ?",
        )
        .bind(doc.parent().path())
        .bind(doc.id())
        .fetch_optional(&mut *tx)
        .await?;

        let mut data = match existing {
            Some(raw) => serde_json::from_str::<Fields>(&raw)?,
            None => Fields::new(),
        };
        merge_fields(&mut data, updates);

        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO documents (collection_path, document_id, data, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (collection_path, document_id) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(doc.parent().path())
        .bind(doc.id())
        .bind(serde_json::to_string(&data)?)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(WriteResult { write_time: now })
    }

    /// All documents of a collection, ordered by id
    pub async fn list_documents(
        &self,
        collection: &CollectionRef,
    ) -> Result<Vec<DocumentSnapshot>, StoreError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT document_id, data, created_at, updated_at
            FROM documents
            WHERE collection_path = ?
            ORDER BY document_id ASC
            "#,
        )
        .bind(collection.path())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DocumentSnapshot::try_from).collect()
    }

    /// Close the underlying pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
