use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Append-only query log configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryLogConfig {
    /// Path to the log file, relative to the working directory (default: "resolver.log")
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

impl Default for QueryLogConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
        }
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from("resolver.log")
}
