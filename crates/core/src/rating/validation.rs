use super::error::CoreError;

/// The one entry with a rating cap.
pub const CAPPED_ENTRY: &str = "cassandra";

/// Highest rating [`CAPPED_ENTRY`] may receive.
pub const CAPPED_ENTRY_MAX_RATING: i64 = 1;

/// Checks a rating write against the business rules.
pub fn validate_rating(name: &str, rating: i64) -> Result<(), CoreError> {
    if name == CAPPED_ENTRY && rating > CAPPED_ENTRY_MAX_RATING {
        return Err(CoreError::InvalidRequest(format!(
            "{CAPPED_ENTRY} cannot be rated above {CAPPED_ENTRY_MAX_RATING}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_entries_accept_any_rating() {
        assert!(validate_rating("python", 0).is_ok());
        assert!(validate_rating("python", 10_000).is_ok());
        assert!(validate_rating("python", -3).is_ok());
    }

    #[test]
    fn test_cassandra_up_to_one_is_allowed() {
        assert!(validate_rating("cassandra", 0).is_ok());
        assert!(validate_rating("cassandra", 1).is_ok());
    }

    #[test]
    fn test_cassandra_above_one_is_rejected() {
        let err = validate_rating("cassandra", 2).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidRequest("cassandra cannot be rated above 1".to_string())
        );
    }

    #[test]
    fn test_rule_is_case_sensitive() {
        assert!(validate_rating("Cassandra", 5).is_ok());
    }
}
