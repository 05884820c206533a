//! Tests for registry initialization and lookup.
//!
//! Responsibilities:
//! - Test `init` validation, resolution, and the one-shot state machine.
//! - Test `get` and the typed accessors, including handle rejection.
//! - Test concurrent `init` and reads.
//! - Test resolution against the real process environment.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `temp_env`.
//! - All other tests inject an in-memory `HashMap` source.

use std::collections::HashMap;

pub mod concurrency_tests;

/// Build an in-memory source from key/value pairs.
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
