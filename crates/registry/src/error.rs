//! Error types for registry initialization, lookup, and doc rendering.
//!
//! Responsibilities:
//! - Define one variant per failure mode of `init`, `get*`, and the renderer.
//! - Carry enough context (option name, declared type, raw value) to fix the input.
//!
//! Does NOT handle:
//! - Logging. Every error is returned to the caller untouched.
//!
//! Invariants:
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Raw environment values only appear in `TypeConversion`.

use std::io::ErrorKind;
use thiserror::Error;

use crate::handle::{Handle, HandleFault};
use crate::value::{Value, ValueType};

/// Errors produced by the registry and its helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("no options provided; at least one option is required")]
    NoOptions,

    #[error("registry already initialized")]
    AlreadyInitialized,

    #[error("registry not initialized; call init() first")]
    NotInitialized,

    #[error("option at position {index} has an empty name")]
    EmptyOptionName { index: usize },

    #[error("option `{name}` is declared more than once")]
    DuplicateOption { name: String },

    #[error(
        "config: `{name}`. required: true. default value: `{default}`. default value must be absent when config is required"
    )]
    DefaultNotNilWhenRequired { name: String, default: Value },

    #[error(
        "config: `{name}`. required: false. default value must be present when config is not required"
    )]
    DefaultIsNilWhenNotRequired { name: String },

    #[error(
        "config: `{name}`. type: `{declared}`. default value of `{default}` is not of type `{declared}`"
    )]
    DefaultTypeMismatch {
        name: String,
        declared: ValueType,
        default: Value,
    },

    #[error("required config option {name} not set")]
    RequiredConfigNotSet { name: String },

    #[error(
        "config `{name}` of type `{declared}` was not set as `{declared}` in environment. environment value: `{raw}`"
    )]
    TypeConversion {
        name: String,
        declared: ValueType,
        raw: String,
    },

    #[error("invalid handle {handle}: {reason}")]
    InvalidHandle { handle: Handle, reason: HandleFault },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: Only the byte index of the parse failure is kept, NOT the
    /// offending line content.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl RegistryError {
    /// Name of the option the error refers to, if any.
    pub fn option_name(&self) -> Option<&str> {
        match self {
            RegistryError::DuplicateOption { name }
            | RegistryError::DefaultNotNilWhenRequired { name, .. }
            | RegistryError::DefaultIsNilWhenNotRequired { name }
            | RegistryError::DefaultTypeMismatch { name, .. }
            | RegistryError::RequiredConfigNotSet { name }
            | RegistryError::TypeConversion { name, .. } => Some(name),
            _ => None,
        }
    }

    /// True for errors caused by the option declarations themselves rather
    /// than by the environment or registry state.
    pub fn is_declaration_error(&self) -> bool {
        matches!(
            self,
            RegistryError::NoOptions
                | RegistryError::EmptyOptionName { .. }
                | RegistryError::DuplicateOption { .. }
                | RegistryError::DefaultNotNilWhenRequired { .. }
                | RegistryError::DefaultIsNilWhenNotRequired { .. }
                | RegistryError::DefaultTypeMismatch { .. }
        )
    }
}
