//! Shared test utilities for envreg-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a complete, valid demo environment.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Every option the demo declares is cleared unless the test sets it.

use assert_cmd::Command;

/// Every environment variable the demo application declares.
pub const OPTION_VARS: &[&str] = &[
    "DATABASE_ENGINE",
    "DATABASE_HOST",
    "DATABASE_PORT",
    "DATABASE_USER",
    "DATABASE_PASSWORD",
    "DATABASE_NAME",
    "DATABASE_MAX_CONNECTIONS",
    "ENABLE_AUDIT",
    "ENABLE_VERBOSE_LOGGING",
    "ENVIRONMENT",
    "HTTP_TIMEOUT_SECONDS",
];

/// Returns a hermetic `envreg-cli` command with no options set.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every declared option and `RUST_LOG` are cleared to avoid host leakage.
pub fn envreg_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envreg-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");
    for var in OPTION_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic `envreg-cli` command with all required options set.
#[allow(dead_code)]
pub fn envreg_cmd_configured() -> Command {
    let mut cmd = envreg_cmd();
    cmd.env("DATABASE_HOST", "localhost")
        .env("DATABASE_USER", "user")
        .env("DATABASE_PASSWORD", "password")
        .env("DATABASE_NAME", "dbname")
        .env("ENVIRONMENT", "local");
    cmd
}
