#[derive(Debug, thiserror::Error)]
pub enum FareCalendarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Supplied fares break a series invariant (duplicate date, zero fare).
    #[error("Invalid fare series: {0}")]
    InvalidSeries(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, FareCalendarError>;
