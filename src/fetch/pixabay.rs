//! Pixabay-backed implementation of the fetch client seam.
//!
//! This module implements [`FetchClient`] against the Pixabay REST API. Each
//! call issues one GET request with the query, page number, and the fixed page
//! size, then decodes the JSON envelope into a [`ResultPage`].

use crate::domain::{Result, ResultPage, PAGE_SIZE};
use crate::fetch::client::FetchClient;
use crate::Config;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Timeout applied to every API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Pixabay image search API.
///
/// Holds a shared `reqwest` client plus the request parameters that stay
/// constant across a session: API key, endpoint, and the configured image
/// filters. Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    /// Shared HTTP client with connection pooling.
    http: reqwest::Client,

    /// Parsed API endpoint, taken from configuration.
    endpoint: Url,

    /// API key sent with every request.
    api_key: String,

    /// Image type filter (`photo`, `illustration`, `vector`, or `all`).
    image_type: String,

    /// Orientation filter (`horizontal`, `vertical`, or `all`).
    orientation: String,

    /// Whether to request only images suitable for all audiences.
    safe_search: bool,
}

impl PixabayClient {
    /// Creates a client from configuration.
    ///
    /// Parses the configured API base URL and builds the underlying HTTP
    /// client with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_base` is not a valid URL or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.api_base)?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
            image_type: config.image_type.clone(),
            orientation: config.orientation.clone(),
            safe_search: config.safe_search,
        })
    }
}

#[async_trait]
impl FetchClient for PixabayClient {
    /// Fetches one page of Pixabay results.
    ///
    /// Sends `key`, `q`, `image_type`, `orientation`, `safesearch`,
    /// `per_page`, and `page` as query parameters. Non-success status codes
    /// and malformed bodies surface as fetch errors.
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage> {
        let params = vec![
            ("key", self.api_key.clone()),
            ("q", query.to_string()),
            ("image_type", self.image_type.clone()),
            ("orientation", self.orientation.clone()),
            ("safesearch", self.safe_search.to_string()),
            ("per_page", PAGE_SIZE.to_string()),
            ("page", page.to_string()),
        ];

        tracing::debug!(query = %query, page = page, "requesting search page");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let result_page = response.json::<ResultPage>().await?;

        tracing::debug!(
            query = %query,
            page = page,
            total_hits = result_page.total_hits,
            hit_count = result_page.hits.len(),
            "search page fetched"
        );

        Ok(result_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let config = Config {
            api_key: "test-key".to_string(),
            ..Config::default()
        };
        assert!(PixabayClient::new(&config).is_ok());
    }

    #[test]
    fn rejects_malformed_api_base() {
        let config = Config {
            api_key: "test-key".to_string(),
            api_base: "pixabay.com/api".to_string(),
            ..Config::default()
        };
        assert!(PixabayClient::new(&config).is_err());
    }
}
