//! Tracing subscriber setup.

use std::str::FromStr;

use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const FALLBACK_LEVEL: LevelFilter = LevelFilter::INFO;

/// Builds the default filter directives for a log level.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!("ratings={level},ratings_core={level},tower_http={level}")
}

/// Resolves a `LOG_LEVEL` value, falling back to `info` when it can't be parsed.
///
/// The second element carries the rejected value so it can be reported once
/// logging is up.
fn resolve_level(log_level: &str) -> (LevelFilter, Option<&str>) {
    match LevelFilter::from_str(log_level.trim()) {
        Ok(level) => (level, None),
        Err(_) => (FALLBACK_LEVEL, Some(log_level)),
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_level` applies to this crate,
/// the core crate and `tower_http`.
pub fn init(log_level: &str) {
    let (level, rejected) = resolve_level(log_level);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| directives(level).into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(rejected) = rejected {
        tracing::error!(
            level = %rejected,
            "Failed to set logging level, falling back to info"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_level_is_used() {
        assert_eq!(resolve_level("debug"), (LevelFilter::DEBUG, None));
        assert_eq!(resolve_level("WARN"), (LevelFilter::WARN, None));
    }

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        assert_eq!(resolve_level("XDDDD"), (LevelFilter::INFO, Some("XDDDD")));
    }

    #[test]
    fn test_directives_cover_service_crates() {
        assert_eq!(
            directives(LevelFilter::DEBUG),
            "ratings=debug,ratings_core=debug,tower_http=debug"
        );
    }
}
