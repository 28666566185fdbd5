//! Error types for the review scheduler.

use thiserror::Error;

/// Failure reported by a durable key-value backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Review item already exists: {0}")]
    DuplicateItem(String),

    #[error("Review item not found: {0}")]
    ItemNotFound(String),

    #[error("Quality rating must be between 0 and 5, got {0}")]
    InvalidQuality(u8),

    #[error("Next review for '{id}' falls outside the representable date range")]
    ScheduleOverflow { id: String },

    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),

    #[error("Stored record for learner '{learner_id}' is corrupt: {reason}")]
    CorruptRecord { learner_id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
