use dioxus::logger::tracing;
use serde::Serialize;
use serde_json::Value;

use super::error::{SearchApiResult, SearchError};
use super::types::{decode_results, SearchResult};
use crate::utils::config;

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// Client for the remote search endpoint. Cheap to clone; shared with the
/// views through Dioxus context.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// POSTs `{"query": ...}` to the endpoint and decodes the enveloped
    /// result list. The query goes out exactly as typed, untrimmed.
    pub async fn search(&self, query: &str) -> SearchApiResult<Vec<SearchResult>> {
        let response = self
            .http
            .post(&self.endpoint)
            .timeout(config::REQUEST_TIMEOUT)
            .json(&SearchRequest { query })
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        decode_results(body)
    }

    /// Fail-soft variant for the dashboard: any failure is logged and shown
    /// to the user as zero results, never as an error screen.
    pub async fn search_or_empty(&self, query: &str) -> Vec<SearchResult> {
        match self.search(query).await {
            Ok(results) => results,
            Err(err @ SearchError::ShapeMismatch(_)) => {
                tracing::warn!("Search response had unexpected shape: {}", err);
                Vec::new()
            }
            Err(err) => {
                tracing::error!("Failed to fetch search results: {}", err);
                Vec::new()
            }
        }
    }
}
