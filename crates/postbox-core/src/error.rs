//! Store-level error types.

use thiserror::Error;

/// Errors a post store can report.
///
/// The in-memory variant only ever produces `NotFound`. The database-backed
/// variant additionally surfaces connection and query failures instead of
/// masking them as empty result sets.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post not found: id {id}")]
    NotFound { id: i64 },

    #[error("backend connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),
}
