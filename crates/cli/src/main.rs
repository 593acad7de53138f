//! # Ferrous Lookup
//!
//! Interactive / batch resolver: every whitespace-separated token is resolved
//! forward or in reverse and appended to the query log.

use clap::Parser;
use ferrous_lookup::bootstrap::{init_logging, load_config};
use ferrous_lookup::di::Services;
use ferrous_lookup_domain::CliOverrides;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Resolve hostnames and IP addresses interactively or from a batch file")]
struct Cli {
    /// Batch file, one or more queries per line (interactive mode when omitted)
    input: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Query log file
    #[arg(short = 'l', long)]
    log_file: Option<PathBuf>,

    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(
        cli.config.as_deref(),
        CliOverrides {
            log_file: cli.log_file,
            log_level: cli.log_level,
            ..Default::default()
        },
    )?;
    init_logging(&config);

    let session = Services::new(&config).session()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.input {
        Some(path) => session.batch(&path, &mut out)?,
        None => session.interactive(io::stdin().lock(), &mut out)?,
    };

    Ok(())
}
