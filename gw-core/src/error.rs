/// Error types for the GamerWrapped core library
use thiserror::Error;

/// Main error type for stats fetching and dashboard input
#[derive(Error, Debug)]
pub enum GwError {
    /// The request never reached the server or the response never came back
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status or a body that does not match the expected schema
    #[error("bad response from {url}: {reason}")]
    Response { url: String, reason: String },

    /// Year outside the selectable range
    #[error("year {year} is outside the available range {first}-{last}")]
    YearOutOfRange { year: i32, first: i32, last: i32 },

    #[error("unknown chart: {0}")]
    UnknownChart(String),

    #[error("unknown orientation: {0}")]
    UnknownOrientation(String),

    #[error("unknown view mode: {0}")]
    UnknownViewMode(String),
}

impl GwError {
    /// True for failures where no usable HTTP exchange happened.
    pub fn is_transport(&self) -> bool {
        matches!(self, GwError::Transport { .. })
    }

    /// True for failures where the server answered with something unusable.
    pub fn is_response(&self) -> bool {
        matches!(self, GwError::Response { .. })
    }
}

/// Type alias for Results using GwError
pub type Result<T> = std::result::Result<T, GwError>;
