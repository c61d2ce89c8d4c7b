//! Source row type.

/// A single post row, already joined with its parent's author.
///
/// Records are read-only snapshots of the source table. Every string column
/// is passed through untouched; a post without a parent carries an empty
/// `parent_author`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostRecord {
    /// Primary key, also used as the pagination cursor.
    pub id: i64,
    pub thread_id: String,
    pub parent_thread_id: String,
    pub author: String,
    /// Author of the parent post, resolved through the self-join.
    pub parent_author: String,
    pub category: String,
    /// Post date, rendered as text by the source.
    pub date: String,
    /// Markdown body.
    pub body: String,
    pub body_normalized: String,
    pub author_normalized: String,
}

impl PostRecord {
    /// Create a record with the given id and empty text columns.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the parent's author.
    pub fn with_parent_author(mut self, parent_author: impl Into<String>) -> Self {
        self.parent_author = parent_author.into();
        self
    }
}
