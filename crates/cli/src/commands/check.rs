//! Check command: resolve the configuration and print every value.
//!
//! Sensitive values are masked; everything else is printed as `NAME=value`,
//! one per line, in declaration order.

use anyhow::Result;
use envreg::{EnvSource, MASK};
use std::io::Write;

use crate::app_config::{AppConfig, options};

pub fn run<S: EnvSource>(config: &AppConfig<S>, out: &mut impl Write) -> Result<()> {
    let registry = config.registry();
    let decls = options();

    for (decl, handle) in decls.iter().zip(config.handles()) {
        let value = registry.get(handle)?;
        if decl.sensitive {
            writeln!(out, "{}={}", decl.name, MASK)?;
        } else {
            writeln!(out, "{}={}", decl.name, value)?;
        }
    }
    tracing::debug!(options = decls.len(), "configuration check passed");
    Ok(())
}
