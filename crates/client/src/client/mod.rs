//! HTTP client for the ratings API.

pub mod entries;
pub mod health;

use ratings_core::api::ProblemDetails;

use crate::error::{ClientError, Result};

/// Environment variable holding the server base URL.
pub const BASE_URL_VAR: &str = "RATINGS_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for the ratings API.
#[derive(Debug, Clone)]
pub struct RatingsClient {
    client: reqwest::Client,
    base_url: String,
}

impl RatingsClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the URL of a single entry, percent-encoding the name.
    fn entry_url(&self, name: &str) -> String {
        self.url(&format!("/v1/entry/{}", urlencoding::encode(name)))
    }

    /// Decode a successful body or turn the problem body into an error.
    ///
    /// `entry` names the entry the request addresses, if any.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        entry: Option<&str>,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(Self::error_from(entry, response).await)
        }
    }

    /// Map a non-success response onto a [`ClientError`].
    ///
    /// The server answers failures with a problem body; its `details` field
    /// becomes the error message. Bodies that are not problem-shaped are used
    /// verbatim. A 404 is only `NotFound` when the request addressed an entry.
    async fn error_from(entry: Option<&str>, response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ProblemDetails>(&body)
            .map(|problem| problem.details)
            .unwrap_or(body);

        match (status, entry) {
            (404, Some(name)) => ClientError::NotFound {
                name: name.to_string(),
            },
            (400, _) => ClientError::BadRequest(message),
            _ => ClientError::ServerError { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = RatingsClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_entry_url_encodes_name() {
        let client = RatingsClient::new("http://localhost:3000");
        assert_eq!(
            client.entry_url("c plus/plus"),
            "http://localhost:3000/v1/entry/c%20plus%2Fplus"
        );
    }
}
