use serde::Deserialize;
use serde_json::Value;

use super::error::{SearchApiResult, SearchError};

/// One product hit from the search endpoint.
///
/// The endpoint's published schema calls the price field `price` (singular),
/// but live responses carry `prices` as a list of formatted amounts; the
/// plural list is what we decode. `currency` is a short code the dashboard
/// only uses as a badge label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub link: String,
    pub prices: Vec<String>,
    pub currency: String,
    pub product_name: String,
}

/// Pulls the result list out of the endpoint's response envelope:
/// `{"data": {"data": [ ... ]}}`.
///
/// Anything off about the envelope — missing path, `data.data` not an array,
/// items with missing or wrongly-typed fields — is a `ShapeMismatch`, never
/// a panic.
pub fn decode_results(body: Value) -> SearchApiResult<Vec<SearchResult>> {
    let items = body
        .get("data")
        .and_then(|outer| outer.get("data"))
        .ok_or_else(|| SearchError::ShapeMismatch("missing data.data in response".to_string()))?;

    if !items.is_array() {
        return Err(SearchError::ShapeMismatch(
            "data.data is not an array".to_string(),
        ));
    }

    serde_json::from_value(items.clone()).map_err(|e| SearchError::ShapeMismatch(e.to_string()))
}
