//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map registry and derived-value errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 always means the configuration itself must be fixed.

use envreg::RegistryError;

use crate::derived::DerivedValueError;

/// Structured exit codes for envreg-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - missing, malformed, or unsupported values.
    ///
    /// Scripts should fix the environment and not retry unchanged.
    ConfigInvalid = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&RegistryError> for ExitCode {
    fn from(err: &RegistryError) -> Self {
        match err {
            RegistryError::RequiredConfigNotSet { .. }
            | RegistryError::TypeConversion { .. }
            | RegistryError::DotenvParse { .. }
            | RegistryError::DotenvIo { .. }
            | RegistryError::DotenvUnknown => ExitCode::ConfigInvalid,
            // Declaration and handle errors are bugs in this binary, not in the environment.
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<RegistryError>() {
                return ExitCode::from(err);
            }
            match cause.downcast_ref::<DerivedValueError>() {
                // Transparent, so the inner error never shows up in the chain.
                Some(DerivedValueError::Registry(inner)) => return ExitCode::from(inner),
                Some(_) => return ExitCode::ConfigInvalid,
                None => {}
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigInvalid.as_i32(), 2);
    }

    #[test]
    fn test_environment_errors_are_config_invalid() {
        let err = RegistryError::RequiredConfigNotSet {
            name: "DATABASE_HOST".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ConfigInvalid);
        assert_eq!(
            ExitCode::from(&RegistryError::NoOptions),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), RegistryError> = Err(RegistryError::DotenvUnknown);
        let err = result.context("loading environment").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ConfigInvalid);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(plain.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_wrapped_registry_error_keeps_its_exit_code() {
        let bug = anyhow::Error::from(DerivedValueError::from(RegistryError::NotInitialized));
        assert_eq!(bug.exit_code(), ExitCode::GeneralError);

        let missing = anyhow::Error::from(DerivedValueError::from(
            RegistryError::RequiredConfigNotSet {
                name: "ENVIRONMENT".to_string(),
            },
        ))
        .context("deriving HTTP client");
        assert_eq!(missing.exit_code(), ExitCode::ConfigInvalid);

        let derived = anyhow::Error::from(DerivedValueError::InvalidEnvironment(
            "staging".to_string(),
        ));
        assert_eq!(derived.exit_code(), ExitCode::ConfigInvalid);
    }
}
