use std::fmt;

/// Failures a search request can run into. None of these reach the user as
/// an error screen; the dashboard falls back to an empty result list and the
/// detail goes to the log.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Request could not be sent, or the response body was not JSON.
    Network(String),
    /// Response was JSON but the expected `data.data` result list was
    /// missing or had the wrong shape.
    ShapeMismatch(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "Search request failed: {}", msg),
            SearchError::ShapeMismatch(msg) => write!(f, "Unexpected response shape: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Network(err.to_string())
    }
}

/// Result type for search endpoint calls.
pub type SearchApiResult<T> = Result<T, SearchError>;
