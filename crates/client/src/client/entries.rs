//! Entry operations.

use ratings_core::api::{NewEntryRequest, RatingRequest};
use ratings_core::rating::RatedEntry;
use reqwest::header::LOCATION;
use serde::Serialize;

use super::RatingsClient;
use crate::error::Result;

/// Outcome of a rating write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub name: String,
    /// True when the entry did not exist before the write.
    pub created: bool,
    /// Location header returned by the server, relative to `/v1`.
    pub location: Option<String>,
}

impl RatingsClient {
    /// List all entries.
    pub async fn list_entries(&self) -> Result<Vec<RatedEntry>> {
        let response = self.client.get(self.url("/v1/entry")).send().await?;
        self.handle_response(None, response).await
    }

    /// Get a single entry by name.
    pub async fn get_entry(&self, name: &str) -> Result<RatedEntry> {
        let response = self.client.get(self.entry_url(name)).send().await?;
        self.handle_response(Some(name), response).await
    }

    /// Set the rating of an entry addressed by name, creating it if missing.
    pub async fn set_rating(&self, name: &str, rating: i64) -> Result<WriteOutcome> {
        let response = self
            .client
            .post(self.entry_url(name))
            .json(&RatingRequest { rating })
            .send()
            .await?;
        self.write_outcome(name, response).await
    }

    /// Create or update an entry by posting the full entry to the collection.
    pub async fn create_entry(&self, name: &str, rating: i64) -> Result<WriteOutcome> {
        let response = self
            .client
            .post(self.url("/v1/entry"))
            .json(&NewEntryRequest {
                name: name.to_string(),
                rating,
            })
            .send()
            .await?;
        self.write_outcome(name, response).await
    }

    /// Delete an entry by name.
    pub async fn delete_entry(&self, name: &str) -> Result<()> {
        let response = self.client.delete(self.entry_url(name)).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(Some(name), response).await)
        }
    }

    async fn write_outcome(&self, name: &str, response: reqwest::Response) -> Result<WriteOutcome> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(Some(name), response).await);
        }
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        Ok(WriteOutcome {
            name: name.to_string(),
            created: status.as_u16() == 201,
            location,
        })
    }
}
