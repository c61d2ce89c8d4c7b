//! Solr implementation of the index sink.
//!
//! This module provides a concrete implementation of `IndexSink` that posts
//! JSON document arrays to a Solr update handler.

mod client;

pub use client::SolrClient;
