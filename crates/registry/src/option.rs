//! Option declarations supplied to `Registry::init` and the doc renderer.
//!
//! Fields are public so callers can build declarations as plain struct
//! literals; the constructors below cover the well-formed cases. Malformed
//! pairings (a required option with a default, an optional one without) are
//! representable on purpose and rejected by `init`.

use crate::value::{Value, ValueType};

/// Declaration of a single configuration option.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionDecl {
    /// External key, e.g. `DATABASE_HOST`.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Declared primitive type.
    pub value_type: ValueType,
    /// Whether the key must be present in the source.
    pub required: bool,
    /// Default used when the key is absent. Must be `Some` iff `!required`.
    pub default: Option<Value>,
    /// Mask the default in rendered docs and tool output.
    pub sensitive: bool,
}

impl OptionDecl {
    /// Declare a required option.
    pub fn required(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            required: true,
            ..Self::default()
        }
    }

    /// Declare an optional option; its type is taken from the default.
    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        let default = default.into();
        Self {
            name: name.into(),
            value_type: default.value_type(),
            required: false,
            default: Some(default),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the option as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}
