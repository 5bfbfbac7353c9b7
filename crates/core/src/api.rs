//! JSON wire types shared by the server and the client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `type` value for every problem body the service emits.
pub const PROBLEM_TYPE_BLANK: &str = "about:blank";

/// Body of `POST /v1/entry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntryRequest {
    pub name: String,
    pub rating: i64,
}

impl NewEntryRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.name.is_empty() {
            return Err(RequestError::EmptyName);
        }
        validate_rating_field(self.rating)
    }
}

/// Body of `POST /v1/entry/{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRequest {
    pub rating: i64,
}

impl RatingRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        validate_rating_field(self.rating)
    }
}

fn validate_rating_field(rating: i64) -> Result<(), RequestError> {
    if rating < 0 {
        return Err(RequestError::NegativeRating(rating));
    }
    Ok(())
}

/// Schema-level problems with a request body, caught before the domain core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("'name' must not be empty")]
    EmptyName,
    #[error("'rating' must be greater than or equal to 0, got {0}")]
    NegativeRating(i64),
}

/// Problem document used for errors and write acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    pub details: String,
}

impl ProblemDetails {
    pub fn new(status: u16, title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind: PROBLEM_TYPE_BLANK.to_string(),
            title: title.into(),
            status,
            details: details.into(),
        }
    }
}

/// Body of `GET /readyz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    pub ready: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_request_requires_both_fields() {
        assert!(serde_json::from_str::<NewEntryRequest>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<NewEntryRequest>(r#"{"name": "python"}"#).is_err());
        assert!(serde_json::from_str::<NewEntryRequest>(r#"{"rating": 5}"#).is_err());
    }

    #[test]
    fn test_new_entry_request_rejects_wrong_types() {
        assert!(serde_json::from_str::<NewEntryRequest>(r#"{"name": 5, "rating": 5}"#).is_err());
        assert!(
            serde_json::from_str::<NewEntryRequest>(r#"{"name": "python", "rating": "5"}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<NewEntryRequest>(r#"{"name": "python", "rating": 5.5}"#)
                .is_err()
        );
    }

    #[test]
    fn test_negative_rating_fails_validation() {
        let request: NewEntryRequest =
            serde_json::from_str(r#"{"name": "python", "rating": -5}"#).unwrap();
        assert_eq!(request.validate(), Err(RequestError::NegativeRating(-5)));

        let request = RatingRequest { rating: -1 };
        assert_eq!(request.validate(), Err(RequestError::NegativeRating(-1)));
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let request = NewEntryRequest {
            name: String::new(),
            rating: 5,
        };
        assert_eq!(request.validate(), Err(RequestError::EmptyName));
    }

    #[test]
    fn test_zero_rating_is_valid() {
        assert!(RatingRequest { rating: 0 }.validate().is_ok());
    }

    #[test]
    fn test_problem_details_serializes_type_field() {
        let problem = ProblemDetails::new(404, "Not found", "Entry not found");
        assert_eq!(
            serde_json::to_value(&problem).unwrap(),
            serde_json::json!({
                "type": "about:blank",
                "title": "Not found",
                "status": 404,
                "details": "Entry not found"
            })
        );
    }
}
