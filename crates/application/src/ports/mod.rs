pub mod name_resolver;
pub mod query_log_repository;

pub use name_resolver::NameResolver;
pub use query_log_repository::QueryLogRepository;
