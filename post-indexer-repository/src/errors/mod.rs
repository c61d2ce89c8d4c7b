//! Error types for the post indexer repository.

mod sink_error;

pub use sink_error::SinkError;
