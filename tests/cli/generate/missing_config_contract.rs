use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_fails_when_config_is_missing() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found: cli-tools.yml"));

    assert!(!ctx.exists("Dockerfile.generated"));
}

#[test]
fn list_fails_when_custom_config_is_missing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["list", "--config", "other.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found: other.yml"));
}

#[test]
fn malformed_config_surfaces_parser_error() {
    let ctx = TestContext::new();
    ctx.write_config("tools:\n  fmt: { command: fmt }\n");

    ctx.cli()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("repo"));
}
