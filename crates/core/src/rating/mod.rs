mod error;
mod http_mapping;
mod service;
mod types;
mod validation;

pub use error::{CoreError, Result};
pub use http_mapping::core_error_to_status_code;
pub use service::RatingService;
pub use types::RatedEntry;
pub use validation::{validate_rating, CAPPED_ENTRY, CAPPED_ENTRY_MAX_RATING};
