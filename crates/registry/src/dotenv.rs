//! Optional `.env` bootstrap for the process environment.
//!
//! Responsibilities:
//! - Load a `.env` file into the process environment before `Registry::init`.
//! - Honour the `DOTENV_DISABLED` gate for implicit `.env` discovery so tests
//!   and CI stay hermetic. An explicitly named file is always loaded.
//!
//! Does NOT handle:
//! - Resolving options; the registry only ever sees the resulting environment.
//!
//! Invariants:
//! - Variables already present in the environment are never overwritten.
//! - A missing `.env` file is not an error.
//! - Errors never include raw `.env` line contents.

use std::path::Path;

use crate::error::RegistryError;

/// Environment variable that disables `.env` loading when set to `true` or `1`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load `.env` from the current directory or its ancestors.
///
/// Returns `Ok(true)` if a file was loaded, `Ok(false)` if loading is
/// disabled or no file exists.
///
/// # Errors
///
/// - `DotenvParse` if the file exists but has invalid syntax.
/// - `DotenvIo` if the file exists but cannot be read.
pub fn load_dotenv() -> Result<bool, RegistryError> {
    if dotenv_disabled() {
        return Ok(false);
    }
    map_result(dotenvy::dotenv().map(|_| ()))
}

/// Load a specific dotenv file, ignoring `DOTENV_DISABLED`.
///
/// Same error mapping as `load_dotenv`; a missing file yields `Ok(false)`.
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<bool, RegistryError> {
    map_result(dotenvy::from_path(path.as_ref()))
}

fn map_result(result: Result<(), dotenvy::Error>) -> Result<bool, RegistryError> {
    match result {
        Ok(()) => {
            tracing::debug!("loaded .env file");
            Ok(true)
        }
        Err(e) if is_not_found(&e) => Ok(false),
        Err(dotenvy::Error::LineParse(_, idx)) => {
            Err(RegistryError::DotenvParse { error_index: idx })
        }
        Err(dotenvy::Error::Io(io_err)) => Err(RegistryError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(RegistryError::DotenvUnknown),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
