//! Run command: the demo application flow.
//!
//! Responsibilities:
//! - Derive a database connection plan and HTTP client profile from config.
//! - Send an audit event when `ENABLE_AUDIT` is on.
//!
//! Does NOT handle:
//! - Real I/O against databases or HTTP endpoints.

use anyhow::Result;
use envreg::EnvSource;
use std::io::Write;

use crate::app_config::AppConfig;
use crate::derived::{derive_db_connection, derive_http_client};

pub fn run<S: EnvSource>(config: &AppConfig<S>, out: &mut impl Write) -> Result<()> {
    let registry = config.registry();
    let db = derive_db_connection(config)?;
    let http = derive_http_client(config)?;
    let verbose = registry.get_bool(config.enable_verbose_logging)?;

    writeln!(
        out,
        "Connecting to {}:{} as {}. Set up Db Conn ({}, database {}, pool {})",
        db.host, db.port, db.user, db.driver, db.database, db.max_connections
    )?;
    if verbose {
        writeln!(
            out,
            "HTTP client: {:?}, timeout {:?}, proxy {}",
            http.environment,
            http.timeout,
            if http.honor_proxy { "from HTTP_PROXY" } else { "disabled" }
        )?;
    }

    writeln!(out, "Did something")?;
    if registry.get_bool(config.enable_audit)? {
        send_audit(out)?;
    }
    Ok(())
}

fn send_audit(out: &mut impl Write) -> Result<()> {
    tracing::info!("sending audit event");
    writeln!(out, "Sent audit")?;
    Ok(())
}
