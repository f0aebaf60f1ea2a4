use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_writes_config_and_entrypoint_that_generate_accepts() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote cli-tools.yml"))
        .stdout(predicate::str::contains("Wrote entrypoint.sh"));

    assert!(ctx.exists("cli-tools.yml"));
    assert!(ctx.exists("entrypoint.sh"));

    ctx.cli().arg("generate").assert().success();
    assert!(ctx.exists("Dockerfile.generated"));
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let ctx = TestContext::new();
    ctx.write_config("tools: {}\n");

    ctx.cli()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(ctx.read("cli-tools.yml"), "tools: {}\n");
}
