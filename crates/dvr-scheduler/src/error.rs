//! Error types for scheduler operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A rule or guide store query (or delete) failed at the transport level.
    /// Refresh treats the failed query as returning zero rows and continues.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A store row carried a timestamp that does not match the store layout.
    /// The row is skipped; remaining rows keep expanding.
    #[error("malformed timestamp {value:?} in {context}")]
    MalformedTimestamp { context: String, value: String },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
