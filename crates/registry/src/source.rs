//! Key-value sources consulted during `Registry::init`.
//!
//! Responsibilities:
//! - Abstract "is this key set, and to what" behind `EnvSource`.
//! - Provide the process environment as the default source.
//!
//! Invariants:
//! - `None` means unset; `Some("")` means set to the empty string. Unlike
//!   `env_var_or_none`-style helpers, empty values are NOT folded into unset.
//! - Lookups must be fast and non-blocking; they run under the init lock.

use std::collections::{BTreeMap, HashMap};

/// Injected lookup from external key to raw string value.
pub trait EnvSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The current process environment.
///
/// Values that are not valid UTF-8 are converted lossily rather than
/// treated as unset, so a present key is never silently replaced by a default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Adapts a closure into an `EnvSource`.
pub struct FnSource<F>(pub F);

impl<F> EnvSource for FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
