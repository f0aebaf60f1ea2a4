use crate::harness::{SAMPLE_CONFIG, TestContext};
use predicates::prelude::*;

#[test]
fn list_shows_enabled_and_disabled_tools() {
    let ctx = TestContext::new();
    ctx.write_config(SAMPLE_CONFIG);

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available CLI Tools:"))
        .stdout(predicate::str::contains(format!(
            "{:<20} {:<10} {:<15} {}",
            "fmt", "Yes", "fmt", "Format source files"
        )))
        .stdout(predicate::str::contains(format!(
            "{:<20} {:<10} {:<15} {}",
            "shot", "No", "shot", "Capture screenshots"
        )));

    assert!(!ctx.exists("Dockerfile.generated"));
}

#[test]
fn list_json_is_machine_readable() {
    let ctx = TestContext::new();
    ctx.write_config(SAMPLE_CONFIG);

    let output = ctx.cli().args(["ls", "--json"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["name"], "fmt");
    assert_eq!(rows[0]["enabled"], true);
    assert_eq!(rows[1]["name"], "shot");
    assert_eq!(rows[1]["enabled"], false);
}

#[test]
fn list_works_when_every_tool_is_disabled() {
    let ctx = TestContext::new();
    ctx.write_config("tools:\n  old: { repo: https://x/old, command: old, enabled: false }\n");

    ctx.cli().arg("list").assert().success().stdout(predicate::str::contains("old"));
}
