//! Page type returned by a single extraction round.

use crate::errors::RowDecodeError;
use post_indexer_shared::PostRecord;

/// Outcome of decoding one row.
pub type RowResult = Result<PostRecord, RowDecodeError>;

/// The rows returned by one page query, in `id` order.
#[derive(Debug, Default)]
pub struct Page {
    rows: Vec<RowResult>,
}

impl Page {
    /// Create a page from decoded rows.
    pub fn new(rows: Vec<RowResult>) -> Self {
        Self { rows }
    }

    /// Create a page with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the query returned any row at all, decodable or not.
    pub fn has_more(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Number of rows returned, including malformed ones.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The id of the last row whose id could be read.
    ///
    /// A malformed row whose id column is unreadable does not count.
    pub fn last_id(&self) -> Option<i64> {
        self.rows.iter().rev().find_map(|row| match row {
            Ok(record) => Some(record.id),
            Err(err) => err.id,
        })
    }

    /// The cursor to use for the next page.
    pub fn next_cursor(&self, cursor: i64) -> i64 {
        self.last_id().map_or(cursor, |id| id.max(cursor))
    }

    /// Consume the page into its rows.
    pub fn into_rows(self) -> Vec<RowResult> {
        self.rows
    }
}
