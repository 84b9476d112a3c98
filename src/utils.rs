/// Configuration constants for the application
pub mod config {
    use std::time::Duration;

    /// Environment variable overriding the search endpoint URL
    pub const SEARCH_ENDPOINT_ENV: &str = "PRICESCOPE_SEARCH_URL";

    /// Search endpoint used when no override is set
    pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://bharat-x-sepia.vercel.app/api/search/";

    /// Upper bound on a single search request; a timed-out request settles
    /// as "no results"
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    /// Number of skeleton cards shown while a search is in flight
    pub const SKELETON_RESULT_CARDS: usize = 3;

    /// Resolve the search endpoint, preferring the environment override
    pub fn search_endpoint() -> String {
        std::env::var(SEARCH_ENDPOINT_ENV)
            .unwrap_or_else(|_| DEFAULT_SEARCH_ENDPOINT.to_string())
    }
}
