//! envreg CLI - demo application for the typed configuration registry.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load `.env` (or `--env-file`) before resolving configuration.
//! - Resolve the application's options once and dispatch to a command.
//!
//! Does NOT handle:
//! - Option resolution rules (see the `envreg` crate).
//!
//! Invariants:
//! - Dotenv loading happens BEFORE `AppConfig::load()` so `.env` values are visible.
//! - `docs` never touches the environment, so it works with nothing configured.
//! - Primary output goes to stdout; logs go to stderr.

mod app_config;
mod args;
mod commands;
mod derived;
mod error;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use app_config::AppConfig;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
    std::process::exit(ExitCode::Success.as_i32());
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    if let Commands::Docs { format } = cli.command {
        return commands::docs::run(format, &mut stdout);
    }

    let loaded = match &cli.env_file {
        Some(path) => {
            anyhow::ensure!(path.is_file(), "env file {} does not exist", path.display());
            envreg::load_dotenv_from(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => envreg::load_dotenv().context("failed to load .env")?,
    };
    tracing::debug!(loaded, "dotenv bootstrap finished");

    let config = AppConfig::load()?;
    match cli.command {
        Commands::Check => commands::check::run(&config, &mut stdout),
        Commands::Run => commands::run::run(&config, &mut stdout),
        Commands::Docs { .. } => Ok(()),
    }
}
