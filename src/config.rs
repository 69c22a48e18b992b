//! Runtime configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_LIFE_TICK_MS` | 100 | delay between generations while running |
//! | `TUI_LIFE_LOG_PATH` | unset | write a log file here (no logging when unset) |
//! | `TUI_LIFE_LOG` | `info` | `tracing` filter directive for the log file |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::TICK_MS;

pub const TICK_MS_VAR: &str = "TUI_LIFE_TICK_MS";
pub const LOG_PATH_VAR: &str = "TUI_LIFE_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "TUI_LIFE_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_ms: u64,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup. Missing or invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup(TICK_MS_VAR)
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(TICK_MS);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            tick_ms,
            log_path,
            log_filter,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
