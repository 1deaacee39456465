//! Configuration module

use chrono::{FixedOffset, Offset, Utc};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// JSON file with the log collection; built-in sample data when unset
    pub seed_file: Option<PathBuf>,

    /// Offset, in minutes east of UTC, used for day headers and clock times
    pub display_offset_minutes: i32,

    /// Rows per category in the dashboard recent lists
    pub recent_limit: usize,

    /// Longest accepted search text, in characters
    pub max_search_len: usize,

    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            seed_file: None,
            display_offset_minutes: 0,
            recent_limit: 5,
            max_search_len: 200,
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a key lookup; unset or unparseable values
    /// keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            environment: lookup("ENVIRONMENT")
                .unwrap_or(defaults.environment),

            seed_file: lookup("LOG_SEED_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            display_offset_minutes: lookup("DISPLAY_UTC_OFFSET_MINUTES")
                .and_then(|m| m.parse().ok())
                .unwrap_or(defaults.display_offset_minutes),

            recent_limit: lookup("RECENT_LIMIT")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.recent_limit),

            max_search_len: lookup("MAX_SEARCH_LEN")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_search_len),

            log_json: lookup("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.log_json),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Display offset; out-of-range values fall back to UTC
    pub fn display_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.display_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }
}
