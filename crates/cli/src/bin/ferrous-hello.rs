//! Toy HTTP server: answers exactly one request with a fixed body, then exits.

use clap::Parser;
use ferrous_lookup::bootstrap::{init_logging, load_config};
use ferrous_lookup_domain::CliOverrides;
use ferrous_lookup_infrastructure::http::HelloServer;
use std::process::ExitCode;
use tracing::warn;

#[derive(Parser)]
#[command(name = "ferrous-hello")]
#[command(version)]
#[command(about = "Serve a single HTTP request with a fixed response")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(
        cli.config.as_deref(),
        CliOverrides {
            log_level: cli.log_level,
            bind_address: cli.bind,
            port: cli.port,
            ..Default::default()
        },
    )?;
    init_logging(&config);

    let server =
        HelloServer::bind(&config.server.socket_address(), config.server.body.clone()).await?;
    println!("Listening on {} ...", server.local_addr()?);

    let served = server
        .serve_once(|_peer, request| {
            println!("---- request start ----\n{}\n---- request end ----", request);
        })
        .await?;

    // A failed send still ends the exchange normally.
    if let Err(e) = &served.sent {
        warn!(peer = %served.peer, error = %e, "Response not fully sent");
        eprintln!("{e}");
    }

    println!("Connection handled, server exiting.");
    Ok(())
}
