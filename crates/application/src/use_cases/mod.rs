pub mod queries;

pub use queries::{
    HostReport, LookupHostUseCase, ProcessQueryUseCase, QueryReport, RunSessionUseCase,
    SessionSummary,
};
