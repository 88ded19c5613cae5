use chrono::NaiveDate;
use thiserror::Error;

/// Custom error types for lapsecull
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Sun position computation failed for {date}: {reason}")]
    SunComputation { date: NaiveDate, reason: String },
}

/// Result type for lapsecull operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
