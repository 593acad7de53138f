use ferrous_lookup_domain::{DomainError, LogRecord};

pub trait QueryLogRepository: Send + Sync {
    /// Appends one record. Each call is a single, independent append.
    fn append(&self, record: &LogRecord) -> Result<(), DomainError>;
}
