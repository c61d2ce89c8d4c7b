//! In-memory source and sink used by the pipeline tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{PipelineError, RowDecodeError};
use crate::extractor::{Page, PostSource, RowResult};
use post_indexer_repository::{IndexSink, SinkError, UpdateOutcome};
use post_indexer_shared::{PostDocument, PostRecord};

/// Source backed by a vector of rows sorted by id.
pub struct InMemorySource {
    rows: Vec<RowResult>,
    fail_at_call: Option<usize>,
    cursors: Mutex<Vec<i64>>,
}

impl InMemorySource {
    pub fn new(rows: Vec<RowResult>) -> Self {
        Self {
            rows,
            fail_at_call: None,
            cursors: Mutex::new(Vec::new()),
        }
    }

    /// A source of `count` well-formed posts with ids `1..=count`.
    pub fn with_posts(count: i64) -> Self {
        Self::new(
            (1..=count)
                .map(|id| Ok(PostRecord::new(id).with_author(format!("user{id}"))))
                .collect(),
        )
    }

    /// Make the `call`-th fetch (zero based) fail with a query error.
    pub fn failing_at(mut self, call: usize) -> Self {
        self.fail_at_call = Some(call);
        self
    }

    /// Cursors passed to every fetch, in call order.
    pub fn cursors(&self) -> Vec<i64> {
        self.cursors.lock().unwrap().clone()
    }
}

fn row_id(row: &RowResult) -> Option<i64> {
    match row {
        Ok(record) => Some(record.id),
        Err(err) => err.id,
    }
}

#[async_trait]
impl PostSource for InMemorySource {
    async fn fetch(&self, cursor: i64, limit: usize) -> Result<Page, PipelineError> {
        let call = {
            let mut cursors = self.cursors.lock().unwrap();
            cursors.push(cursor);
            cursors.len() - 1
        };
        if self.fail_at_call == Some(call) {
            return Err(PipelineError::query("connection reset by peer"));
        }

        // Rows without a readable id always sort past the cursor, like a
        // corrupt row the database keeps returning.
        let rows = self
            .rows
            .iter()
            .filter(|row| row_id(row).map_or(true, |id| id > cursor))
            .take(limit)
            .cloned()
            .collect();

        Ok(Page::new(rows))
    }
}

/// Scripted response for one `update` call.
pub enum SinkResponse {
    Accept,
    Reject(u16, &'static str),
    TransportFailure,
    SerializationFailure,
}

/// Sink that answers from a script and accepts once the script runs out.
pub struct MockSink {
    script: Mutex<VecDeque<SinkResponse>>,
    commit_fails: bool,
    pub update_calls: AtomicUsize,
    pub commit_calls: AtomicUsize,
    pub delivered: Mutex<Vec<PostDocument>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::scripted(Vec::new())
    }

    pub fn scripted(script: Vec<SinkResponse>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            commit_fails: false,
            update_calls: AtomicUsize::new(0),
            commit_calls: AtomicUsize::new(0),
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn with_failing_commit(mut self) -> Self {
        self.commit_fails = true;
        self
    }

    pub fn updates(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn commits(&self) -> usize {
        self.commit_calls.load(Ordering::SeqCst)
    }

    pub fn delivered_ids(&self) -> Vec<i64> {
        self.delivered.lock().unwrap().iter().map(|d| d.id).collect()
    }
}

#[async_trait]
impl IndexSink for MockSink {
    async fn update(&self, documents: &[PostDocument]) -> Result<UpdateOutcome, SinkError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        let response = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(SinkResponse::Accept);

        match response {
            SinkResponse::Accept => {
                self.delivered.lock().unwrap().extend_from_slice(documents);
                Ok(UpdateOutcome::Accepted)
            }
            SinkResponse::Reject(status, body) => Ok(UpdateOutcome::Rejected {
                status,
                body: body.to_string(),
            }),
            SinkResponse::TransportFailure => Err(SinkError::transport("connection refused")),
            SinkResponse::SerializationFailure => {
                Err(SinkError::serialization("float must be finite"))
            }
        }
    }

    async fn commit(&self) -> Result<(), SinkError> {
        self.commit_calls.fetch_add(1, Ordering::SeqCst);
        if self.commit_fails {
            Err(SinkError::transport("connection refused"))
        } else {
            Ok(())
        }
    }
}

/// A malformed row for source fixtures.
pub fn malformed(id: Option<i64>) -> RowResult {
    Err(RowDecodeError::new(id, "column \"author\" is NULL"))
}
