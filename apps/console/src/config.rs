//! Console configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so `autolot` runs out of the box.

use std::env;
use std::path::PathBuf;

/// Console app configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Directory holding the user record file.
    pub data_dir: PathBuf,

    /// Log filter directive (same syntax as `RUST_LOG`).
    pub log_filter: String,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// * `AUTOLOT_DATA_DIR` - where `users.json` lives (default: `./data`)
    /// * `AUTOLOT_LOG` - tracing filter (default: `info`)
    pub fn load() -> Self {
        ConsoleConfig {
            data_dir: env::var("AUTOLOT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),

            log_filter: env::var("AUTOLOT_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Full path of the user record file.
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            data_dir: PathBuf::from("data"),
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ConsoleConfig::default();
        assert_eq!(config.users_file(), PathBuf::from("data/users.json"));
        assert_eq!(config.log_filter, "info");
    }
}
