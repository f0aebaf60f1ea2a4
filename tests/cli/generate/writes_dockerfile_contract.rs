use crate::harness::{SAMPLE_CONFIG, TestContext};
use predicates::prelude::*;

#[test]
fn dry_run_writes_requested_output() {
    let ctx = TestContext::new();
    ctx.write_config(SAMPLE_CONFIG);

    ctx.cli()
        .args(["dry-run", "--output", "Dockerfile.custom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled tools: fmt"))
        .stdout(predicate::str::contains("Generated Dockerfile: Dockerfile.custom"))
        .stdout(predicate::str::contains(
            "docker build -t sample-tools:dev -f Dockerfile.custom .",
        ));

    let dockerfile = ctx.read("Dockerfile.custom");
    assert!(dockerfile.contains("# Tools: fmt\n"));
    assert!(dockerfile.contains("    git \\\n    nodejs \\\n    npm \\\n    && rm -rf"));
    assert!(dockerfile.contains(
        "RUN echo '#!/bin/bash\\ncd /opt/cli-tools/fmt && uv run fmt \"$@\"' > /usr/local/bin/fmt"
    ));
    assert!(dockerfile.contains("> /usr/local/bin/f && \\\n"));
}

#[test]
fn disabled_tools_are_absent_from_the_dockerfile() {
    let ctx = TestContext::new();
    ctx.write_config(SAMPLE_CONFIG);

    ctx.cli().arg("generate").assert().success();

    let dockerfile = ctx.read("Dockerfile.generated");
    assert!(!dockerfile.contains("shot"));
    assert!(!dockerfile.contains("screenshot"));
    assert!(!dockerfile.contains("PUPPETEER"));
    assert!(!dockerfile.contains("chromium"));
}

#[test]
fn generating_twice_is_byte_identical() {
    let ctx = TestContext::new();
    ctx.write_config(SAMPLE_CONFIG);

    ctx.cli().args(["g", "-o", "first"]).assert().success();
    ctx.cli().args(["g", "-o", "second"]).assert().success();

    assert_eq!(ctx.read("first"), ctx.read("second"));
}
