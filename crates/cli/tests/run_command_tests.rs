//! Integration tests for `envreg-cli run`.

mod common;

use common::envreg_cmd_configured;
use predicates::prelude::*;

#[test]
fn test_run_default_flow() {
    envreg_cmd_configured()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Connecting to localhost:5432 as user. Set up Db Conn",
        ))
        .stdout(predicate::str::contains("Sent audit").not());
}

#[test]
fn test_run_with_audit() {
    envreg_cmd_configured()
        .env("ENABLE_AUDIT", "TRUE")
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Did something\nSent audit\n"));
}

#[test]
fn test_run_rejects_unknown_environment() {
    envreg_cmd_configured()
        .env("ENVIRONMENT", "staging")
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "must be one of dev, uat, prod, local. got: staging",
        ));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    envreg_cmd_configured()
        .args(["--verbose", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("config registry initialized"));
}
