//! Health check operations.

use ratings_core::api::Readiness;

use super::RatingsClient;
use crate::error::Result;

impl RatingsClient {
    /// Check that the server process is up.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(None, response).await)
        }
    }

    /// Check whether the server can reach its storage.
    ///
    /// A 503 still carries a readiness body, so it is reported as
    /// `ready: false` instead of an error.
    pub async fn readyz(&self) -> Result<Readiness> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        if response.status().as_u16() == 503 {
            return Ok(response.json().await?);
        }
        self.handle_response(None, response).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_readyz_reports_unavailable_storage() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/readyz");
                then.status(503).json_body(json!({ "ready": false }));
            })
            .await;

        let client = RatingsClient::new(server.base_url());
        let readiness = client.readyz().await.unwrap();

        mock.assert_async().await;
        assert!(!readiness.ready);
    }

    #[tokio::test]
    async fn test_livez_ok() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/livez");
                then.status(200).body("OK");
            })
            .await;

        let client = RatingsClient::new(server.base_url());
        client.livez().await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_livez_missing_route_is_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/livez");
                then.status(404).body("not found");
            })
            .await;

        let client = RatingsClient::new(server.base_url());
        let err = client.livez().await.unwrap_err();

        assert!(matches!(
            err,
            crate::error::ClientError::ServerError { status: 404, .. }
        ));
    }
}
