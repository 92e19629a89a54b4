use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Default age after which a cited source is flagged as old.
pub const DEFAULT_STALE_AFTER_DAYS: i64 = 365;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
    pub scoring: ScoringConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Where the transparency catalog is loaded from
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Alternative catalog document; the embedded one is used when unset.
    pub path: Option<PathBuf>,
}

/// Source credibility scoring configuration
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub stale_after_days: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let catalog = CatalogConfig {
            path: env::var("CATALOG_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        };

        let stale_after_days = match env::var("SOURCE_STALE_AFTER_DAYS") {
            Ok(raw) => match raw.trim().parse::<i64>() {
                Ok(days) if days > 0 => days,
                _ => {
                    return Err(AppError::Config {
                        message: format!(
                            "SOURCE_STALE_AFTER_DAYS must be a positive integer, got '{}'",
                            raw
                        ),
                    })
                }
            },
            Err(_) => DEFAULT_STALE_AFTER_DAYS,
        };

        Ok(Config {
            logging,
            catalog,
            scoring: ScoringConfig { stale_after_days },
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
        }
    }
}
