//! Configuration and dependency wiring for the post indexer.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::IndexerConfig;
