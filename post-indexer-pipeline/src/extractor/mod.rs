//! Extractor module for the post indexer pipeline.
//!
//! Reads the source table one bounded page at a time, ordered by `id`.

mod config;
mod page;
mod postgres_extractor;
mod source;

pub use config::{SourceConfig, DEFAULT_TABLE};
pub use page::{Page, RowResult};
pub use postgres_extractor::PostgresExtractor;
pub use source::PostSource;
