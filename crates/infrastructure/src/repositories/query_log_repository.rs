use ferrous_lookup_application::ports::QueryLogRepository;
use ferrous_lookup_domain::{DomainError, LogRecord};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Append-only text log, one line per query.
///
/// The file is opened, appended and closed on every record; nothing is held
/// open between queries.
#[derive(Debug, Clone)]
pub struct FileQueryLogRepository {
    path: PathBuf,
}

impl FileQueryLogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every well-formed record back; malformed lines are skipped.
    pub fn read_all(&self) -> Result<Vec<LogRecord>, DomainError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.log_error(e)),
        };

        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.log_error(e))?;
            match LogRecord::parse(&line) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    warn!(line = index + 1, reason = %reason, "Skipping malformed query log line");
                }
            }
        }
        Ok(records)
    }

    fn log_error(&self, err: std::io::Error) -> DomainError {
        DomainError::QueryLogError(format!("{}: {}", self.path.display(), err))
    }
}

impl QueryLogRepository for FileQueryLogRepository {
    fn append(&self, record: &LogRecord) -> Result<(), DomainError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.log_error(e))?;

        let line = format!("{}\n", record);
        file.write_all(line.as_bytes())
            .map_err(|e| self.log_error(e))?;

        debug!(path = %self.path.display(), query = %record.query, "Query logged");
        Ok(())
    }
}
