//! Configuration options of the demo application.
//!
//! Responsibilities:
//! - Declare every option the application reads, in one place.
//! - Keep the resulting handles in a typed struct next to the registry.
//!
//! Does NOT handle:
//! - Interpreting values (see `derived` for values computed from config).
//!
//! Invariants:
//! - `options()` and the field assignment in `load_from` use the same order.

use anyhow::{Context, Result, anyhow};
use envreg::{EnvSource, Handle, OptionDecl, ProcessEnv, Registry, ValueType};

/// Resolved application configuration.
pub struct AppConfig<S = ProcessEnv> {
    registry: Registry<S>,
    pub database_engine: Handle,
    pub database_host: Handle,
    pub database_port: Handle,
    pub database_user: Handle,
    pub database_password: Handle,
    pub database_name: Handle,
    pub max_connections: Handle,
    pub enable_audit: Handle,
    pub enable_verbose_logging: Handle,
    pub environment: Handle,
    pub http_timeout_seconds: Handle,
}

/// Declarations for every option the application reads.
pub fn options() -> Vec<OptionDecl> {
    vec![
        OptionDecl::optional("DATABASE_ENGINE", "postgres")
            .with_description("The database engine: postgres, mysql or sqlite"),
        OptionDecl::required("DATABASE_HOST", ValueType::String)
            .with_description("The database host"),
        OptionDecl::optional("DATABASE_PORT", "5432").with_description("The database port."),
        OptionDecl::required("DATABASE_USER", ValueType::String)
            .with_description("The username for the database"),
        OptionDecl::required("DATABASE_PASSWORD", ValueType::String)
            .with_description("The password for the database")
            .sensitive(),
        OptionDecl::required("DATABASE_NAME", ValueType::String)
            .with_description("The name of the database"),
        OptionDecl::optional("DATABASE_MAX_CONNECTIONS", 10)
            .with_description("Maximum size of the connection pool"),
        OptionDecl::optional("ENABLE_AUDIT", false).with_description("Enable audit logging"),
        OptionDecl::optional("ENABLE_VERBOSE_LOGGING", false)
            .with_description("Enable verbose logging"),
        OptionDecl::required("ENVIRONMENT", ValueType::String)
            .with_description("The environment the application is running in: dev, uat, prod or local"),
        OptionDecl::optional("HTTP_TIMEOUT_SECONDS", 30.0)
            .with_description("Timeout for outbound HTTP requests, in seconds"),
    ]
}

impl AppConfig<ProcessEnv> {
    /// Resolve the application configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(ProcessEnv)
    }
}

impl<S: EnvSource> AppConfig<S> {
    /// Resolve the application configuration from `source`.
    pub fn load_from(source: S) -> Result<Self> {
        let registry = Registry::with_source(source);
        let handles = registry
            .init(&options())
            .context("failed to resolve application configuration")?;

        let count = handles.len();
        let [
            database_engine,
            database_host,
            database_port,
            database_user,
            database_password,
            database_name,
            max_connections,
            enable_audit,
            enable_verbose_logging,
            environment,
            http_timeout_seconds,
        ]: [Handle; 11] = handles
            .try_into()
            .map_err(|_| anyhow!("expected 11 handles, registry returned {}", count))?;

        Ok(Self {
            registry,
            database_engine,
            database_host,
            database_port,
            database_user,
            database_password,
            database_name,
            max_connections,
            enable_audit,
            enable_verbose_logging,
            environment,
            http_timeout_seconds,
        })
    }

    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Every handle, in the order `options()` declares them.
    pub fn handles(&self) -> [Handle; 11] {
        [
            self.database_engine,
            self.database_host,
            self.database_port,
            self.database_user,
            self.database_password,
            self.database_name,
            self.max_connections,
            self.enable_audit,
            self.enable_verbose_logging,
            self.environment,
            self.http_timeout_seconds,
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::full_env;
    use super::*;
    use envreg::RegistryError;

    #[test]
    fn test_handles_follow_declaration_order() {
        let env = full_env();
        let config = AppConfig::load_from(env.clone()).unwrap();
        let decls = options();
        let handles = config.handles();
        assert_eq!(handles.len(), decls.len());

        for (slot_order, (decl, handle)) in decls.iter().zip(handles).enumerate() {
            let expected = env
                .get(&decl.name)
                .map(|raw| envreg::Value::from(raw.as_str()))
                .or_else(|| decl.default.clone())
                .unwrap();
            assert_eq!(
                config.registry().get(handle),
                Ok(expected),
                "handle #{slot_order} does not belong to {}",
                decl.name
            );
        }
    }

    #[test]
    fn test_options_render_docs() {
        let docs = envreg::doc_string(&options()).unwrap();
        assert!(docs.contains("DATABASE_PORT\n\tDescription: The database port.\n"));
        assert!(docs.contains("\tDefault: 30\n"));
    }

    #[test]
    fn test_load_from_full_env() {
        let config = AppConfig::load_from(full_env()).unwrap();
        let registry = config.registry();

        assert_eq!(registry.get_string(config.database_host).unwrap(), "localhost");
        assert_eq!(registry.get_string(config.database_port).unwrap(), "5432");
        assert_eq!(registry.get_string(config.database_engine).unwrap(), "postgres");
        assert_eq!(registry.get_int(config.max_connections).unwrap(), 10);
        assert!(!registry.get_bool(config.enable_audit).unwrap());
        assert_eq!(registry.get_float(config.http_timeout_seconds).unwrap(), 30.0);
    }

    #[test]
    fn test_missing_required_reports_option() {
        let mut env = full_env();
        env.remove("DATABASE_NAME");

        let err = AppConfig::load_from(env).err().unwrap();
        let cause = err.downcast_ref::<RegistryError>().unwrap();
        assert_eq!(cause.option_name(), Some("DATABASE_NAME"));
    }
}
