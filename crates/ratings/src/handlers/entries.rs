//! Entry handlers.
//!
//! Each handler validates the request shape, calls the domain core and turns
//! the result into a JSON response. Errors go through [`ApiError`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderValue, StatusCode},
    response::Response,
    Json,
};

use ratings_core::api::{NewEntryRequest, RatingRequest};
use ratings_core::rating::RatedEntry;

use crate::{
    handlers::{error::problem, ApiError},
    state::AppState,
};

/// Relative `Location` of an entry, with the name percent-encoded.
fn entry_location(name: &str) -> HeaderValue {
    let location = format!("entry/{}", urlencoding::encode(name));
    // Percent-encoding leaves only visible ASCII, which is always a valid header value.
    HeaderValue::from_str(&location).unwrap_or_else(|_| HeaderValue::from_static("entry"))
}

/// Response for a successful rating write.
fn write_response(name: &str, created: bool) -> Response {
    let (status, title, details) = if created {
        (StatusCode::CREATED, "Created", "Entry created")
    } else {
        (StatusCode::OK, "OK", "Entry updated")
    };
    problem(status, title, details, Some(entry_location(name)))
}

/// List all entries (GET /v1/entry).
pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<RatedEntry>>, ApiError> {
    let entries = state.ratings.get_entries().await?;
    Ok(Json(entries))
}

/// Create or update an entry from a full body (POST /v1/entry).
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<NewEntryRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::debug!(name = %request.name, rating = request.rating, "Received set rating request");

    let created = state
        .ratings
        .set_entry_rating(&request.name, request.rating)
        .await?;

    Ok(write_response(&request.name, created))
}

/// Get a single entry (GET /v1/entry/{name}).
pub async fn get_entry(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RatedEntry>, ApiError> {
    let entry = state.ratings.get_entry(&name).await?;
    Ok(Json(entry))
}

/// Create or update the entry named in the path (POST /v1/entry/{name}).
pub async fn rate_entry(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<RatingRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::debug!(name = %name, rating = request.rating, "Received set rating request");

    let created = state.ratings.set_entry_rating(&name, request.rating).await?;

    Ok(write_response(&name, created))
}

/// Delete an entry (DELETE /v1/entry/{name}).
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    state.ratings.delete_entry(&name).await?;

    tracing::info!(name = %name, "Deleted entry");

    Ok(problem(StatusCode::OK, "OK", "Entry deleted", None))
}
