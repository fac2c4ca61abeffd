use chrono::NaiveDate;

pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid airport code: {0} (expected three letters, e.g. KRK)")]
    InvalidAirport(String),

    #[error("Origin and destination are both {0}")]
    SameAirport(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Date {0} is in the past")]
    PastDate(NaiveDate),

    #[error("Invalid time: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Time window needs both bounds, only {0} given")]
    HalfWindow(String),

    #[error("Live flight search is not available, use --mode mock")]
    LiveUnavailable,

    #[error("Scenario file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario data error: {0}")]
    Json(#[from] serde_json::Error),
}
