pub mod lookup_host;
pub mod process_query;
pub mod run_session;

pub use lookup_host::{HostReport, LookupHostUseCase};
pub use process_query::{ProcessQueryUseCase, QueryReport};
pub use run_session::{RunSessionUseCase, SessionSummary};
