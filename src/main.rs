//! pypivet - PyPI package name validator.
//!
//! CLI entry point.

use clap::Parser;
use pypivet::filter::parse_names;
use pypivet::{Config, Filter, PypiChecker};
use std::fs;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging. Diagnostics go to stderr; stdout carries only
    // validated names.
    let env_filter = if config.verbose {
        EnvFilter::new("pypivet=debug,info")
    } else {
        EnvFilter::new("pypivet=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> pypivet::Result<()> {
    let raw = config.read_input()?;
    let names = parse_names(&raw);

    if names.is_empty() {
        info!("No package names on input");
        return Ok(());
    }

    let checker = PypiChecker::new(&config.index_url, config.timeout)?;
    let filter = Filter::new(checker);

    let valid = match config.output {
        Some(ref path) => {
            let mut file = fs::File::create(path)?;
            filter.run(&names, &mut file).await?
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            filter.run(&names, &mut lock).await?
        }
    };

    info!("{} of {} package names validated", valid.len(), names.len());
    Ok(())
}
