use ferrous_lookup_domain::Config;
use tracing::{debug, info};

/// Diagnostics go to stderr; stdout carries the lookup results.
pub fn init_logging(config: &Config) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(true)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
    info!(
        query_log = %config.query_log.path.display(),
        bind = %config.server.socket_address(),
        "Configuration loaded"
    );
}
