//! # Post Indexer Repository
//!
//! This crate provides the sink side of the re-indexer: the `IndexSink` trait
//! the pipeline delivers batches through, its error types, and a concrete
//! implementation for a Solr-style JSON update handler.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod solr;
pub mod types;

pub use config::SinkConfig;
pub use errors::SinkError;
pub use interfaces::IndexSink;
pub use solr::SolrClient;
pub use types::UpdateOutcome;
