use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_aborts_without_enabled_tools() {
    let ctx = TestContext::new();
    ctx.write_config(
        "tools:\n  a: { repo: https://x/a, command: a, enabled: false }\n  b: { repo: https://x/b, command: b, enabled: false }\n",
    );

    ctx.cli()
        .args(["generate", "--output", "out.Dockerfile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tools enabled in configuration!"));

    assert!(!ctx.exists("out.Dockerfile"));
}

#[test]
fn empty_tool_table_is_also_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("system_packages: [git]\n");

    ctx.cli().arg("dry-run").assert().failure();

    assert!(!ctx.exists("Dockerfile.generated"));
}
