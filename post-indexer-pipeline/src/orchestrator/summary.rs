//! Per-round and per-run accounting.

use std::time::Duration;

/// What happened in one extraction round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Rows returned by the page query, including malformed ones.
    pub fetched: usize,
    /// Documents built and handed to the loader.
    pub indexed: usize,
    /// Malformed rows plus documents the sink never accepted.
    pub failed: usize,
    /// Cursor to use for the next round.
    pub next_cursor: i64,
    /// Wall-clock time spent on the round.
    pub duration: Duration,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows decoded and queued for delivery.
    pub count: usize,
    /// Rows that failed to decode plus documents in abandoned batches.
    pub failed: usize,
    /// Rounds performed, including the final empty one.
    pub rounds: usize,
    /// Total wall-clock time.
    pub elapsed: Duration,
}

impl RunSummary {
    /// Fold a round into the totals.
    pub fn record(self, round: &RoundReport) -> Self {
        Self {
            count: self.count + round.indexed,
            failed: self.failed + round.failed,
            rounds: self.rounds + 1,
            elapsed: self.elapsed,
        }
    }

    /// Set the total elapsed time.
    pub fn finish(self, elapsed: Duration) -> Self {
        Self { elapsed, ..self }
    }
}
