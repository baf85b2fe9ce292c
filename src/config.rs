//! Configuration Module
//!
//! Handles loading gateway configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default directory for file-tier records, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "cache";

/// Default tracing filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "memo_gateway=info";

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding file-tier records and their archives
    pub cache_dir: PathBuf,
    /// Fallback tracing filter directive
    pub log_filter: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DIR` - Directory for file-tier records (default: `cache`)
    /// - `CACHE_LOG` - Fallback tracing filter (default: `memo_gateway=info`)
    pub fn from_env() -> Self {
        Self {
            cache_dir: env::var("CACHE_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
            log_filter: env::var("CACHE_LOG")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Returns a copy of this config rooted at another cache directory.
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
