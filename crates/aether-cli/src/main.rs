use std::process::ExitCode;

use aether_cli::Cli;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match aether_cli::run_stdio(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("aether-cli: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
