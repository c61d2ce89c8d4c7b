//! PostgreSQL extractor implementation.
//!
//! Pages through the posts table with a keyset cursor on `id`, joining each
//! post to its parent to resolve the parent's author.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{debug, info, instrument};

use crate::errors::{PipelineError, RowDecodeError};
use crate::extractor::{Page, PostSource, RowResult, SourceConfig};
use post_indexer_shared::PostRecord;

/// Extractor reading posts from PostgreSQL.
pub struct PostgresExtractor {
    pool: PgPool,
    query: String,
}

impl PostgresExtractor {
    /// Connect to the source database.
    ///
    /// # Returns
    ///
    /// * `Ok(PostgresExtractor)` - A connected extractor
    /// * `Err(PipelineError::ConnectionError)` - If the database cannot be reached
    pub async fn connect(config: &SourceConfig) -> Result<Self, PipelineError> {
        info!(details = %config.redacted(), "Connecting to source database");

        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        // Pages are fetched strictly one after another.
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                PipelineError::connection(format!(
                    "Failed to connect with [{}]: {}",
                    config.redacted(),
                    e
                ))
            })?;

        info!("Source database connection established");

        Ok(Self::with_pool(pool, &config.table))
    }

    /// Create an extractor over an existing pool.
    pub fn with_pool(pool: PgPool, table: &str) -> Self {
        Self {
            pool,
            query: page_query(table),
        }
    }

    /// Close the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PostSource for PostgresExtractor {
    #[instrument(skip(self))]
    async fn fetch(&self, cursor: i64, limit: usize) -> Result<Page, PipelineError> {
        let limit = i64::try_from(limit)
            .map_err(|_| PipelineError::config(format!("Page limit {limit} is too large")))?;

        let rows = sqlx::query(&self.query)
            .bind(cursor)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PipelineError::query(e.to_string()))?;

        debug!(rows = rows.len(), "Fetched page");

        Ok(Page::new(rows.iter().map(decode_row).collect()))
    }
}

/// Build the keyset page query for a table.
///
/// `$1` is the exclusive lower bound on `id`, `$2` the row limit.
fn page_query(table: &str) -> String {
    format!(
        "SELECT p.id::bigint AS id, p.thread_id, p.parent_thread_id, p.author, p.category, \
         p.post_date::text AS post_date, p.body_md, p.author_normalized, p.body_normalized, \
         q.author AS parent_author \
         FROM {table} AS p \
         LEFT JOIN {table} AS q ON p.parent_id = q.id AND p.id != q.id \
         WHERE p.id > $1 \
         ORDER BY p.id ASC \
         LIMIT $2"
    )
}

/// Decode a row into a record.
///
/// The id is read on its own first so a malformed row can still report
/// which post it was.
fn decode_row(row: &PgRow) -> RowResult {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| RowDecodeError::new(None, e.to_string()))?;

    let text = |column: &str| -> Result<String, RowDecodeError> {
        row.try_get(column)
            .map_err(|e| RowDecodeError::new(Some(id), e.to_string()))
    };

    let parent_author: Option<String> = row
        .try_get("parent_author")
        .map_err(|e| RowDecodeError::new(Some(id), e.to_string()))?;

    Ok(PostRecord {
        id,
        thread_id: text("thread_id")?,
        parent_thread_id: text("parent_thread_id")?,
        author: text("author")?,
        parent_author: parent_author.unwrap_or_default(),
        category: text("category")?,
        date: text("post_date")?,
        body: text("body_md")?,
        body_normalized: text("body_normalized")?,
        author_normalized: text("author_normalized")?,
    })
}
