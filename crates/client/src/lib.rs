//! ratings_client - CLI client for the ratings API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::RatingsClient;
pub use error::{ClientError, Result};
