use ferrous_lookup_application::ports::{NameResolver, QueryLogRepository};
use ferrous_lookup_application::use_cases::{
    LookupHostUseCase, ProcessQueryUseCase, RunSessionUseCase,
};
use ferrous_lookup_domain::{Config, DomainError, SpecialRangeTable};
use ferrous_lookup_infrastructure::repositories::FileQueryLogRepository;
use ferrous_lookup_infrastructure::system::SystemResolver;
use std::sync::Arc;

/// Resolver and query log shared by the lookup use cases.
pub struct Services {
    pub resolver: Arc<dyn NameResolver>,
    pub query_log: Arc<dyn QueryLogRepository>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: Arc::new(SystemResolver::new()),
            query_log: Arc::new(FileQueryLogRepository::new(config.query_log.path.clone())),
        }
    }

    pub fn session(&self) -> Result<RunSessionUseCase, DomainError> {
        let processor = ProcessQueryUseCase::new(
            Arc::clone(&self.resolver),
            Arc::clone(&self.query_log),
            SpecialRangeTable::standard()?,
        );
        Ok(RunSessionUseCase::new(Arc::new(processor)))
    }

    pub fn lookup_host(&self) -> LookupHostUseCase {
        LookupHostUseCase::new(Arc::clone(&self.resolver))
    }
}
