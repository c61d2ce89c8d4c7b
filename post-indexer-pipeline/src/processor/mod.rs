//! Processor module for the post indexer pipeline.
//!
//! Turns a page of extracted rows into a batch of search documents.

mod document_processor;

pub use document_processor::{DocumentProcessor, ProcessedBatch};
