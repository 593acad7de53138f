//! One-shot lookup of a single hostname or IPv4 address.

use clap::Parser;
use ferrous_lookup::bootstrap::{init_logging, load_config};
use ferrous_lookup::di::Services;
use ferrous_lookup_domain::{AddressFamily, CliOverrides, DomainError};
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ferrous-host")]
#[command(version)]
#[command(about = "Look up one hostname (forward) or address (reverse)")]
struct Cli {
    /// Hostname or IP address
    query: Option<String>,

    /// Address family for forward lookups (any, ipv4, ipv6)
    #[arg(short = 'f', long, default_value = "ipv4")]
    family: AddressFamily,

    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(
        None,
        CliOverrides {
            log_level: cli.log_level,
            ..Default::default()
        },
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    let use_case = Services::new(&config).lookup_host();
    let report = match use_case.execute(cli.query.as_deref(), cli.family) {
        Ok(report) => report,
        Err(e) => {
            println!("{}", failure_message(&e));
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    match report.render(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn failure_message(err: &DomainError) -> &'static str {
    match err {
        DomainError::MissingQuery => "You forgot to add arguments!",
        DomainError::InvalidIpAddress(_) => "Invalid address",
        _ => "Not found information",
    }
}
