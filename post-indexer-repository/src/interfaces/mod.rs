//! Interface definitions for the index sink.
//!
//! This module defines the abstract `IndexSink` trait that allows for
//! dependency injection and swappable sink implementations.

mod index_sink;

pub use index_sink::IndexSink;
