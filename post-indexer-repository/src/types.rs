//! Response types for index sink operations.

/// Result of an update request that reached the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The sink answered with a 2xx status.
    Accepted,
    /// The sink answered with a non-success status.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, kept for diagnostics.
        body: String,
    },
}
