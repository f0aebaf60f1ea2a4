use crate::harness::{SAMPLE_CONFIG, TestContext};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

#[cfg(unix)]
fn fake_docker(ctx: &TestContext, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = ctx.root().join("fake-docker");
    let args_file = ctx.root().join("docker-args.txt");
    fs::write(
        &script,
        format!("#!/bin/sh\necho \"$@\" > '{}'\nexit {}\n", args_file.display(), exit_code),
    )
    .unwrap();
    let mut perms = fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms).unwrap();
    script
}

#[cfg(unix)]
#[test]
fn build_writes_dockerfile_and_runs_docker_build() {
    let ctx = TestContext::new();
    ctx.write_config(SAMPLE_CONFIG);
    ctx.write_entrypoint();
    let docker = fake_docker(&ctx, 0);

    ctx.cli()
        .args(["build", "--docker"])
        .arg(&docker)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled tools: fmt"))
        .stdout(predicate::str::contains("Generated Dockerfile: Dockerfile.generated\n"))
        .stdout(predicate::str::contains("Building Docker image: sample-tools:dev"))
        .stdout(predicate::str::contains("Successfully built: sample-tools:dev"));

    assert!(ctx.exists("Dockerfile.generated"));
    let args = fs::read_to_string(ctx.root().join("docker-args.txt")).unwrap();
    assert_eq!(args.trim(), "build -t sample-tools:dev -f Dockerfile.generated .");
}

#[cfg(unix)]
#[test]
fn builder_program_can_come_from_the_environment() {
    let ctx = TestContext::new();
    ctx.write_config(SAMPLE_CONFIG);
    ctx.write_entrypoint();
    let docker = fake_docker(&ctx, 0);

    ctx.cli().arg("b").env("CLI_TOOLS_DOCKER", &docker).assert().success();

    assert!(ctx.root().join("docker-args.txt").exists());
}

#[test]
fn build_with_missing_builder_reports_launch_error() {
    let ctx = TestContext::new();
    ctx.write_config(SAMPLE_CONFIG);
    ctx.write_entrypoint();

    ctx.cli()
        .args(["build", "--docker", "cli-tools-no-such-builder"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch 'cli-tools-no-such-builder'"));
}
