//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not read application configuration; options come from the
//!   environment through the registry, never from flags.

use clap::{Parser, Subcommand};
use envreg::DocFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envreg-cli")]
#[command(about = "Demo application for the envreg typed configuration registry", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envreg-cli docs\n  envreg-cli docs --format env > .env.example\n  DATABASE_HOST=localhost envreg-cli check\n  envreg-cli --env-file staging.env run\n"
)]
pub struct Cli {
    /// Load variables from this dotenv file instead of `.env`
    #[arg(long, global = true, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Enable debug logging on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print documentation for every configuration option
    Docs {
        /// Output format (text, json, env)
        #[arg(short, long, default_value = "text")]
        format: DocFormat,
    },

    /// Resolve configuration from the environment and print it
    Check,

    /// Run the demo application with the resolved configuration
    Run,
}
