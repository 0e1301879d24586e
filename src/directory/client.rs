use super::types::{DirectoryError, RawCountry};
use std::time::Duration;

/// Bound on a single outbound request, connection through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the upstream country directory.
///
/// Holds one shared `reqwest::Client` for connection reuse. The base URL is
/// injected so tests can point the client at a local stub server.
pub struct DirectoryClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the candidate records for `name`.
    ///
    /// Issues exactly one GET; failures are never retried here. An empty
    /// candidate array is a valid "no match" answer, not an error.
    pub async fn search(&self, name: &str) -> Result<Vec<RawCountry>, DirectoryError> {
        let url = format!(
            "{}/v3.1/name/{}",
            self.base_url,
            urlencoding::encode(name)
        );

        let response = self
            .http_client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| DirectoryError::InvalidPayload(e.to_string()))
    }
}
