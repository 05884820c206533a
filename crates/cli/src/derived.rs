//! Values derived from the resolved configuration.
//!
//! Responsibilities:
//! - Pick a database driver from `DATABASE_ENGINE`.
//! - Pick an HTTP client profile from `ENVIRONMENT` and `HTTP_TIMEOUT_SECONDS`.
//!
//! Does NOT handle:
//! - Opening connections. The demo only describes what it would connect to.
//!
//! Invariants:
//! - Unknown engines and environments are errors, never silently defaulted.

use envreg::{EnvSource, RegistryError};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Error, Debug)]
pub enum DerivedValueError {
    #[error("invalid environment. must be one of dev, uat, prod, local. got: {0}")]
    InvalidEnvironment(String),

    #[error("invalid db engine. must be one of postgres, mysql, sqlite. got: {0}")]
    InvalidDbEngine(String),

    #[error("invalid HTTP timeout: {0} seconds")]
    InvalidTimeout(f64),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbDriver {
    Postgres,
    Mysql,
    Sqlite,
}

impl fmt::Display for DbDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DbDriver::Postgres => "postgres",
            DbDriver::Mysql => "mysql",
            DbDriver::Sqlite => "sqlite",
        })
    }
}

/// Everything needed to open a database connection, minus the password.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConnectionPlan {
    pub driver: DbDriver,
    pub host: String,
    pub port: String,
    pub user: String,
    pub database: String,
    pub max_connections: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Uat,
    Prod,
    Local,
}

/// HTTP client settings for the current environment.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClientProfile {
    pub environment: Environment,
    pub timeout: Duration,
    /// Dev clients pick up HTTP_PROXY; the others connect directly.
    pub honor_proxy: bool,
}

pub fn derive_db_connection<S: EnvSource>(
    config: &AppConfig<S>,
) -> Result<DbConnectionPlan, DerivedValueError> {
    let registry = config.registry();
    let engine = registry.get_string(config.database_engine)?;
    let driver = match engine {
        "postgres" => DbDriver::Postgres,
        "mysql" => DbDriver::Mysql,
        "sqlite" => DbDriver::Sqlite,
        other => return Err(DerivedValueError::InvalidDbEngine(other.to_string())),
    };

    Ok(DbConnectionPlan {
        driver,
        host: registry.get_string(config.database_host)?.to_string(),
        port: registry.get_string(config.database_port)?.to_string(),
        user: registry.get_string(config.database_user)?.to_string(),
        database: registry.get_string(config.database_name)?.to_string(),
        max_connections: registry.get_int(config.max_connections)?,
    })
}

pub fn derive_http_client<S: EnvSource>(
    config: &AppConfig<S>,
) -> Result<HttpClientProfile, DerivedValueError> {
    let registry = config.registry();
    let environment = match registry.get_string(config.environment)? {
        "dev" => Environment::Dev,
        "uat" => Environment::Uat,
        "prod" => Environment::Prod,
        "local" => Environment::Local,
        other => return Err(DerivedValueError::InvalidEnvironment(other.to_string())),
    };

    let secs = registry.get_float(config.http_timeout_seconds)?;
    let timeout = match Duration::try_from_secs_f64(secs) {
        Ok(timeout) if !timeout.is_zero() => timeout,
        _ => return Err(DerivedValueError::InvalidTimeout(secs)),
    };

    Ok(HttpClientProfile {
        environment,
        timeout,
        honor_proxy: environment == Environment::Dev,
    })
}
