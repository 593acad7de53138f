//! Configuration module for Ferrous Lookup
//!
//! - `root`: Main configuration and CLI overrides
//! - `query_log`: Query log file location
//! - `logging`: Diagnostic logging settings
//! - `server`: One-shot HTTP server binding and body
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod query_log;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query_log::QueryLogConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
