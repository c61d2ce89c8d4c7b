//! # Post Indexer Shared
//!
//! Types shared by every stage of the post re-indexer: the row read from the
//! source table and the document shipped to the search index.

pub mod document;
pub mod record;

pub use document::PostDocument;
pub use record::PostRecord;
