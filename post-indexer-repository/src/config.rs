//! Configuration types for the index sink.

use url::Url;

use crate::errors::SinkError;

/// Default update handler of the local unstructured posts core.
pub const DEFAULT_UPDATE_URL: &str = "http://localhost:8983/solr/unstructured_posts/update";

/// Configuration for a [`SolrClient`](crate::SolrClient).
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Endpoint that accepts `POST` of a JSON document array.
    pub update_url: Url,
}

impl SinkConfig {
    /// Parse a config from an update handler URL.
    pub fn new(update_url: &str) -> Result<Self, SinkError> {
        let update_url = Url::parse(update_url)
            .map_err(|e| SinkError::config(format!("Invalid update URL {update_url}: {e}")))?;

        if !matches!(update_url.scheme(), "http" | "https") {
            return Err(SinkError::config(format!(
                "Unsupported scheme for update URL: {}",
                update_url.scheme()
            )));
        }

        Ok(Self { update_url })
    }

    /// The update URL with `commit=true` appended to any existing query.
    pub fn commit_url(&self) -> Url {
        let mut url = self.update_url.clone();
        url.query_pairs_mut().append_pair("commit", "true");
        url
    }
}
