use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Missing query argument")]
    MissingQuery,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resolver error: {0}")]
    ResolverError(String),

    #[error("Cannot open input file {path}: {reason}")]
    InputUnreadable { path: String, reason: String },

    #[error("Invalid special range: {0}")]
    InvalidSpecialRange(String),

    #[error("Query log error: {0}")]
    QueryLogError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Resolution failures are reported and logged; they never stop a session.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound(_) | DomainError::ResolverError(_)
        )
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
