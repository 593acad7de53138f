//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod query_log;
pub mod resolution;
pub mod special_range;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{tokenize, AddressFamily, DnsQuery, QueryKind};
pub use errors::DomainError;
pub use query_log::LogRecord;
pub use resolution::{ForwardLookup, QueryOutcome, ReverseLookup, NOT_FOUND};
pub use special_range::{SpecialRange, SpecialRangeTable};
