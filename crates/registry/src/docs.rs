//! Documentation rendering for option declarations.
//!
//! Responsibilities:
//! - Render declarations as plain-text stanzas, JSON, or a `.env` template.
//!
//! Does NOT handle:
//! - Registry state. Rendering is a pure function of the declarations.
//!
//! Invariants:
//! - Output order is input order.
//! - Defaults of sensitive options are always masked.

use serde_json::json;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::RegistryError;
use crate::option::OptionDecl;

/// Placeholder shown instead of a sensitive default.
pub const MASK: &str = "********";

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocFormat {
    #[default]
    Text,
    Json,
    EnvTemplate,
}

impl FromStr for DocFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(DocFormat::Text),
            "json" => Ok(DocFormat::Json),
            "env" | "dotenv" => Ok(DocFormat::EnvTemplate),
            other => Err(format!(
                "unknown doc format '{}', expected one of: text, json, env",
                other
            )),
        }
    }
}

/// Render plain-text documentation for `options`.
///
/// ```text
/// DATABASE_PORT
///     Description: The database port.
///     Type: string
///     Required: false
///     Default: 5432
/// ```
/// (indentation is a tab).
pub fn doc_string(options: &[OptionDecl]) -> Result<String, RegistryError> {
    render(options, DocFormat::Text)
}

/// Render documentation for `options` in `format`.
pub fn render(options: &[OptionDecl], format: DocFormat) -> Result<String, RegistryError> {
    if options.is_empty() {
        return Err(RegistryError::NoOptions);
    }

    Ok(match format {
        DocFormat::Text => render_text(options),
        DocFormat::Json => render_json(options),
        DocFormat::EnvTemplate => render_env_template(options),
    })
}

fn default_text(decl: &OptionDecl) -> Option<String> {
    let default = decl.default.as_ref()?;
    if decl.sensitive {
        Some(MASK.to_string())
    } else {
        Some(default.to_string())
    }
}

fn render_text(options: &[OptionDecl]) -> String {
    let mut docs = String::new();
    for decl in options {
        let _ = write!(
            docs,
            "{}\n\tDescription: {}\n\tType: {}\n\tRequired: {}\n",
            decl.name, decl.description, decl.value_type, decl.required
        );
        if decl.required {
            continue;
        }
        if let Some(default) = default_text(decl) {
            let _ = writeln!(docs, "\tDefault: {}", default);
        }
    }
    docs
}

fn render_json(options: &[OptionDecl]) -> String {
    let entries: Vec<serde_json::Value> = options
        .iter()
        .map(|decl| {
            let default = match (&decl.default, decl.required, decl.sensitive) {
                (Some(_), false, true) => json!(MASK),
                (Some(value), false, false) => json!(value),
                _ => serde_json::Value::Null,
            };
            json!({
                "name": decl.name,
                "description": decl.description,
                "type": decl.value_type,
                "required": decl.required,
                "default": default,
                "sensitive": decl.sensitive,
            })
        })
        .collect();

    format!("{:#}", json!({ "options": entries }))
}

fn render_env_template(options: &[OptionDecl]) -> String {
    let mut out = String::new();
    for (i, decl) in options.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let requirement = if decl.required { "required" } else { "optional" };
        let _ = writeln!(out, "# {} ({}, {})", decl.name, decl.value_type, requirement);
        for line in decl.description.lines() {
            let _ = writeln!(out, "# {}", line);
        }
        let value = match (&decl.default, decl.required || decl.sensitive) {
            (Some(default), false) => default.to_string(),
            _ => String::new(),
        };
        let _ = writeln!(out, "{}={}", decl.name, value);
    }
    out
}
