//! Per-option validation and value resolution.
//!
//! Invariants:
//! - Declaration checks (required/default pairing, default type) run before
//!   the source is consulted.
//! - Booleans follow an any-non-"TRUE"-is-false policy; they never fail to parse.
//! - Numeric parsing does not trim whitespace.

use crate::error::RegistryError;
use crate::option::OptionDecl;
use crate::source::EnvSource;
use crate::value::{Value, ValueType};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Environment,
    Default,
}

impl Origin {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Origin::Environment => "environment",
            Origin::Default => "default",
        }
    }
}

/// Check the required/default pairing and the default's type.
pub(crate) fn validate_decl(decl: &OptionDecl) -> Result<(), RegistryError> {
    match (&decl.default, decl.required) {
        (Some(default), true) => Err(RegistryError::DefaultNotNilWhenRequired {
            name: decl.name.clone(),
            default: default.clone(),
        }),
        (None, false) => Err(RegistryError::DefaultIsNilWhenNotRequired {
            name: decl.name.clone(),
        }),
        (Some(default), false) if default.value_type() != decl.value_type => {
            Err(RegistryError::DefaultTypeMismatch {
                name: decl.name.clone(),
                declared: decl.value_type,
                default: default.clone(),
            })
        }
        _ => Ok(()),
    }
}

/// Resolve one declaration against `source`.
pub(crate) fn resolve<S>(decl: &OptionDecl, source: &S) -> Result<(Value, Origin), RegistryError>
where
    S: EnvSource + ?Sized,
{
    validate_decl(decl)?;

    match source.lookup(&decl.name) {
        Some(raw) => convert(&decl.name, decl.value_type, raw).map(|v| (v, Origin::Environment)),
        None => match &decl.default {
            Some(default) if !decl.required => Ok((default.clone(), Origin::Default)),
            _ => Err(RegistryError::RequiredConfigNotSet {
                name: decl.name.clone(),
            }),
        },
    }
}

/// Convert a raw source string into the declared type.
pub(crate) fn convert(
    name: &str,
    value_type: ValueType,
    raw: String,
) -> Result<Value, RegistryError> {
    let mismatch = |raw: String| RegistryError::TypeConversion {
        name: name.to_string(),
        declared: value_type,
        raw,
    };

    match value_type {
        ValueType::Bool => Ok(Value::Bool(raw.eq_ignore_ascii_case("TRUE"))),
        ValueType::Int => match raw.parse::<i64>() {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Err(mismatch(raw)),
        },
        ValueType::Float => match raw.parse::<f64>() {
            Ok(x) if x.is_infinite() && !spells_infinity(&raw) => Err(mismatch(raw)),
            Ok(x) => Ok(Value::Float(x)),
            Err(_) => Err(mismatch(raw)),
        },
        ValueType::String => Ok(Value::String(raw)),
    }
}

/// Out-of-range literals such as `1e400` overflow to infinity; only an
/// explicit `inf`/`infinity` (either sign, any case) may produce one.
fn spells_infinity(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
