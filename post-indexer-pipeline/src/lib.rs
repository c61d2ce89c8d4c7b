//! # Post Indexer Pipeline
//!
//! This crate provides the pipeline components for reading posts out of
//! PostgreSQL and re-indexing them into a search index.
//!
//! ## Architecture
//!
//! The pipeline follows the Extractor-Processor-Loader pattern:
//!
//! 1. **Extractor**: Reads pages of rows using a keyset cursor on `id`
//! 2. **Processor**: Maps decoded rows into search documents
//! 3. **Loader**: Delivers each batch to the sink, with one recovery retry
//! 4. **Orchestrator**: Drives rounds until the table is exhausted

pub mod errors;
pub mod extractor;
pub mod loader;
pub mod orchestrator;
pub mod processor;

#[cfg(test)]
mod test_support;

pub use errors::{PipelineError, RowDecodeError};
