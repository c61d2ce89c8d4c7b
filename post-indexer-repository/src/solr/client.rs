//! Solr update-handler client.
//!
//! Documents are sent as a single JSON array per batch. The handler adds or
//! replaces each document by its `id`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::SinkConfig;
use crate::errors::SinkError;
use crate::interfaces::IndexSink;
use crate::types::UpdateOutcome;
use post_indexer_shared::PostDocument;

/// HTTP client for a Solr JSON update handler.
///
/// # Example
///
/// ```ignore
/// let config = SinkConfig::new("http://localhost:8983/solr/unstructured_posts/update")?;
/// let client = SolrClient::new(config)?;
///
/// match client.update(&documents).await? {
///     UpdateOutcome::Accepted => {}
///     UpdateOutcome::Rejected { status, body } => eprintln!("{status}: {body}"),
/// }
/// ```
pub struct SolrClient {
    client: Client,
    config: SinkConfig,
}

impl SolrClient {
    /// Create a new client for the configured update handler.
    ///
    /// No request is made; an unreachable sink shows up on the first update.
    pub fn new(config: SinkConfig) -> Result<Self, SinkError> {
        let client = Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| SinkError::connection(e.to_string()))?;

        info!(url = %config.update_url, "Created Solr client");

        Ok(Self { client, config })
    }
}

#[async_trait]
impl IndexSink for SolrClient {
    #[instrument(skip(self, documents), fields(count = documents.len()))]
    async fn update(&self, documents: &[PostDocument]) -> Result<UpdateOutcome, SinkError> {
        let body = serde_json::to_vec(documents)?;

        let response = self
            .client
            .post(self.config.update_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "Update accepted");
            return Ok(UpdateOutcome::Accepted);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = %status, "Update rejected by sink");

        Ok(UpdateOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    #[instrument(skip(self))]
    async fn commit(&self) -> Result<(), SinkError> {
        let response = self.client.get(self.config.commit_url()).send().await?;

        debug!(status = %response.status(), "Commit request answered");
        Ok(())
    }
}
