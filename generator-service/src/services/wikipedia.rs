//! Wikipedia extract fetcher.
//!
//! Performs a single query-API call per request and returns the article's
//! plain-text extract. Failure modes are explicit: a missing page is not
//! the same thing as an upstream outage.

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

/// Error type for extract fetching.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Article '{title}' not found")]
    NotFound { title: String },

    #[error("Wikipedia API returned status {status}")]
    Upstream { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse Wikipedia response: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    extract: Option<String>,
    // The query API marks nonexistent titles with a "missing" key.
    missing: Option<serde_json::Value>,
}

/// Client for the Wikipedia query API.
#[derive(Clone)]
pub struct WikipediaClient {
    client: Client,
    api_url: String,
}

impl WikipediaClient {
    pub fn new(api_url: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: api_url.to_string(),
        }
    }

    /// Fetch the plain-text extract for an article title.
    ///
    /// The title is passed through as-is; redirect and disambiguation
    /// handling is left to the remote API.
    pub async fn fetch_extract(&self, title: &str) -> Result<String, FetchError> {
        tracing::debug!(title = %title, "Fetching Wikipedia extract");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("explaintext", "true"),
                ("titles", title),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(FetchError::NotFound {
                title: title.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        extract_from_response(title, body)
    }
}

/// Pull the extract out of a deserialized query response.
///
/// The pages map holds a single entry for a single-title query; a page
/// marked missing or carrying no extract counts as not found.
fn extract_from_response(title: &str, body: QueryResponse) -> Result<String, FetchError> {
    let pages = body
        .query
        .ok_or_else(|| FetchError::Decode("response has no query field".to_string()))?
        .pages;

    let page = pages.into_values().next().ok_or_else(|| FetchError::NotFound {
        title: title.to_string(),
    })?;

    if page.missing.is_some() {
        return Err(FetchError::NotFound {
            title: title.to_string(),
        });
    }

    match page.extract {
        Some(extract) if !extract.is_empty() => Ok(extract),
        _ => Err(FetchError::NotFound {
            title: title.to_string(),
        }),
    }
}
