//! CLI command implementations.
//!
//! Every command writes its primary output to the supplied writer (stdout in
//! production) so tests can capture it; diagnostics go through `tracing` to stderr.

pub mod check;
pub mod docs;
pub mod run;
