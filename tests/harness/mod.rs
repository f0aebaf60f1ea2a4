#![allow(dead_code)]


pub(crate) use test_context::TestContext;

/// One enabled tool with a Node.js requirement, plus a disabled one.
pub(crate) const SAMPLE_CONFIG: &str = r#"
base:
  image_name: sample-tools
  image_tag: dev
system_packages:
  - git
tools:
  fmt:
    repo: https://x/fmt
    command: fmt
    aliases: [f]
    requires: [nodejs]
    description: Format source files
  shot:
    repo: https://x/shot
    local_name: screenshot
    command: shot
    requires: [chromium]
    description: Capture screenshots
    enabled: false
"#;
