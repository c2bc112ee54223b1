//! Document store layer for the SleeQ House site.
//!
//! This crate provides async access to collections of JSON documents keyed
//! by `(collection, id)`, backed by SQLite via SQLx. Handlers and tests
//! depend on the [`DocumentStore`] trait; [`Store`] is the production
//! implementation.
//!
//! # Example
//!
//! ```no_run
//! use store::{message, DocumentStore, Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let store = Store::connect("sqlite:sleeq.db?mode=rwc").await?;
//!     store.migrate().await?;
//!
//!     // Read back a contact message
//!     let message = message::get_message(&store, "msg-42").await?;
//!     println!("{} wrote: {}", message.full_name, message.message);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gallery;
pub mod ids;
pub mod message;
pub mod models;
pub mod notification;
pub mod settings;

pub use error::{Result, StoreError};
pub use ids::{IdGenerator, IdKind, RandomIds};
pub use models::{
    GalleryItem, Message, MessageStatus, Notification, NotificationPriority, NotificationSource,
    NotificationStatus, NotificationType, SocialLinks, SourceType,
};

use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// A document fetched from a collection, paired with its store id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Document id within its collection.
    pub id: String,
    /// JSON body as stored.
    pub data: Value,
}

/// Schemaless document operations, keyed by collection name and document id.
///
/// This trait is object-safe and can be used with `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write `data` at `collection/id`, replacing any existing document.
    async fn set(&self, collection: &str, id: &str, data: &Value) -> Result<()>;

    /// Fetch the document at `collection/id`, if present.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Enumerate all documents in `collection` in store order.
    async fn list(&self, collection: &str) -> Result<Vec<Document>>;
}

/// Current UTC time as an ISO-8601 string (millisecond precision, `Z`
/// suffix), the format every stored timestamp uses.
pub fn iso_now() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// SQLite-backed document store.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Default pool size for store connections.
    /// Enough for concurrent form submissions alongside gallery reads.
    const DEFAULT_POOL_SIZE: u32 = 8;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> store::Result<()> {
    /// // File database
    /// let store = store::Store::connect("sqlite:data/sleeq.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let store = store::Store::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to store: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run store migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running store migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DocumentStore for Store {
    async fn set(&self, collection: &str, id: &str, data: &Value) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES (?, ?, ?)
            ON CONFLICT(collection, id) DO UPDATE SET
                data = excluded.data
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(data.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let raw = sqlx::query_scalar::<_, String>(
            r#"
            SELECT data
            FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        raw.map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(StoreError::from)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT id, data
            FROM documents
            WHERE collection = ?
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, raw)| {
                Ok(Document {
                    id,
                    data: serde_json::from_str(&raw)?,
                })
            })
            .collect()
    }
}
