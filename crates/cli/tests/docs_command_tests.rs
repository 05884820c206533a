//! Integration tests for `envreg-cli docs`.

mod common;

use common::{OPTION_VARS, envreg_cmd};
use predicates::prelude::*;

#[test]
fn test_docs_text_needs_no_environment() {
    envreg_cmd()
        .arg("docs")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "DATABASE_ENGINE\n\tDescription: The database engine: postgres, mysql or sqlite\n\tType: string\n\tRequired: false\n\tDefault: postgres\n",
        ))
        .stdout(predicate::str::contains(
            "DATABASE_PASSWORD\n\tDescription: The password for the database\n\tType: string\n\tRequired: true\n",
        ));
}

#[test]
fn test_docs_json_lists_all_options() {
    let output = envreg_cmd()
        .args(["docs", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = parsed["options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, OPTION_VARS);
}

#[test]
fn test_docs_env_template() {
    envreg_cmd()
        .args(["docs", "--format", "env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# DATABASE_HOST (string, required)\n"))
        .stdout(predicate::str::contains("DATABASE_PORT=5432\n"))
        .stdout(predicate::str::contains("DATABASE_PASSWORD=\n"));
}

#[test]
fn test_docs_rejects_unknown_format() {
    envreg_cmd()
        .args(["docs", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown doc format"));
}
