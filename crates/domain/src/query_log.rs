use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::sync::Arc;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const QUERY_PREFIX: &str = "] QUERY: \"";
const RESULT_SEPARATOR: &str = "\" -> RESULT: \"";

/// One line of the append-only query log:
/// `[YYYY-MM-DD HH:MM:SS] QUERY: "<query>" -> RESULT: "<result>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub query: Arc<str>,
    pub result: String,
}

impl LogRecord {
    /// Record stamped with the current local time.
    pub fn now(query: Arc<str>, result: impl Into<String>) -> Self {
        Self::at(Local::now().naive_local(), query, result)
    }

    pub fn at(timestamp: NaiveDateTime, query: Arc<str>, result: impl Into<String>) -> Self {
        Self {
            timestamp,
            query,
            result: result.into(),
        }
    }

    /// Parses a line previously produced by the `Display` impl.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let rest = line
            .strip_prefix('[')
            .ok_or_else(|| "log line must start with '['".to_string())?;

        let (stamp, rest) = rest
            .split_once(QUERY_PREFIX)
            .ok_or_else(|| "missing QUERY field".to_string())?;
        let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .map_err(|e| format!("invalid timestamp {}: {}", stamp, e))?;

        let (query, result) = rest
            .split_once(RESULT_SEPARATOR)
            .ok_or_else(|| "missing RESULT field".to_string())?;
        let result = result
            .strip_suffix('"')
            .ok_or_else(|| "unterminated RESULT field".to_string())?;

        Ok(Self::at(timestamp, Arc::from(query), result))
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] QUERY: \"{}\" -> RESULT: \"{}\"",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.query,
            self.result
        )
    }
}
