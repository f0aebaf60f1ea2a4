use crate::harness::{SAMPLE_CONFIG, TestContext};
use predicates::prelude::*;

#[cfg(unix)]
#[test]
fn non_zero_builder_exit_is_reported_with_its_code() {
    let ctx = TestContext::new();
    ctx.write_config(SAMPLE_CONFIG);
    ctx.write_entrypoint();

    ctx.cli()
        .args(["build", "--docker", "false"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Build failed with exit code: 1"))
        .stdout(predicate::str::contains("Successfully built").not());

    assert!(ctx.exists("Dockerfile.generated"));
}

#[test]
fn build_without_enabled_tools_never_writes_dockerfile() {
    let ctx = TestContext::new();
    ctx.write_config("tools:\n  fmt: { repo: https://x/fmt, command: fmt, enabled: false }\n");

    ctx.cli()
        .args(["build", "--docker", "false"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tools enabled in configuration!"));

    assert!(!ctx.exists("Dockerfile.generated"));
}
