use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

/// Env var naming a dotenv file to load before reading configuration.
pub const CONFIG_FILE_VAR: &str = "RATINGS_CONFIG";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (default: "sqlite://ratings.db")
    pub database_url: String,
    /// Maximum number of pooled database connections (default: 5)
    pub database_pool_size: u32,
    /// Seconds to wait for a pooled connection before giving up (default: 5)
    pub database_pool_timeout_seconds: u64,
    /// Seconds before an in-flight request is answered with 408 (default: 10)
    pub request_timeout_seconds: u64,
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - SQLite connection URL (default: "sqlite://ratings.db")
    /// - `DATABASE_POOL_SIZE` - Max pooled connections (default: 5)
    /// - `DATABASE_POOL_TIMEOUT_SECONDS` - Pool checkout timeout (default: 5)
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request timeout (default: 10)
    /// - `LOG_LEVEL` - Fallback log level (default: "info")
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://ratings.db".to_string()),
            database_pool_size: env::var("DATABASE_POOL_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(5),
            database_pool_timeout_seconds: env::var("DATABASE_POOL_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Get the pool checkout timeout as a Duration.
    pub fn database_pool_timeout(&self) -> Duration {
        Duration::from_secs(self.database_pool_timeout_seconds)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Loads a dotenv file into the process environment.
///
/// Uses the file named by `RATINGS_CONFIG` when it points at an existing file,
/// otherwise `.env` in the working directory if there is one. Variables that
/// are already set are left alone. Returns the loaded path, if any.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    let config_file = env::var_os(CONFIG_FILE_VAR).map(PathBuf::from);
    load_dotenv_from(config_file.as_deref(), Path::new(".env"))
}

fn load_dotenv_from(
    config_file: Option<&Path>,
    fallback: &Path,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    if let Some(path) = config_file.filter(|path| path.is_file()) {
        dotenvy::from_path(path)?;
        return Ok(Some(path.to_path_buf()));
    }

    match dotenvy::from_path(fallback) {
        Ok(()) => Ok(Some(fallback.to_path_buf())),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
