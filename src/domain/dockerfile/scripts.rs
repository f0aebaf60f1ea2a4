//! Shell scripts embedded into the build file as `echo` arguments.
//!
//! Script bodies are joined with a literal `\n` so that `echo` in the image's
//! `/bin/sh` expands them into real newlines when the script is written. That
//! `echo` expands every other backslash sequence too, so backslashes in the
//! lines themselves are doubled first.

use crate::domain::{BaseConfig, Tool};

use super::{TOOLS_ROOT, UPDATE_SCRIPT};

const ECHO_NEWLINE: &str = "\\n";
const HELP_NAME_WIDTH: usize = 12;

/// Escape text for placement inside a single-quoted shell word.
pub fn single_quoted(text: &str) -> String {
    text.replace('\'', r"'\''")
}

/// Escape text for a single-quoted argument of `/bin/sh`'s `echo`.
pub fn echo_argument(text: &str) -> String {
    single_quoted(&text.replace('\\', r"\\"))
}

fn echo_body(lines: &[String]) -> String {
    lines.iter().map(|line| echo_argument(line)).collect::<Vec<_>>().join(ECHO_NEWLINE)
}

/// Escape text for placement inside a double-quoted `echo` argument.
fn double_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '"' | '$' | '`' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Escaped name padded to the help column by its printed width.
fn padded_name(name: &str) -> String {
    let padding = HELP_NAME_WIDTH.saturating_sub(name.chars().count());
    format!("{}{}", double_quoted(name), " ".repeat(padding))
}

/// Body of `update-cli-tools`: pull every tool and re-run its install steps.
pub fn update_script(tools: &[&Tool], base: &BaseConfig) -> String {
    let mut lines = vec![
        "#!/bin/bash".to_string(),
        "echo \"Updating CLI tools from GitHub...\"".to_string(),
        String::new(),
    ];

    for tool in tools {
        lines.push("echo \"\"".to_string());
        lines.push(format!("echo \"==> Updating {}\"", tool.local_name()));
        lines.push(format!("cd {}/{}", TOOLS_ROOT, tool.local_name()));
        lines.push(format!("git pull origin {}", tool.branch()));
        lines.push(tool.install_command(base).to_string());
        if let Some(post_install) = tool.post_install() {
            lines.push(post_install.to_string());
        }
    }

    lines.push("echo \"\"".to_string());
    lines.push("echo \"All CLI tools updated!\"".to_string());

    echo_body(&lines)
}

/// Body of `cli-tools-help`: every command and alias with its description.
pub fn help_script(tools: &[&Tool], image_reference: &str) -> String {
    let mut lines = vec![
        "#!/bin/bash".to_string(),
        "echo \"CLI Tools Docker Image\"".to_string(),
        "echo \"======================\"".to_string(),
        "echo \"\"".to_string(),
        "echo \"Available commands:\"".to_string(),
    ];

    for tool in tools {
        let command = &tool.spec.command;
        lines.push(format!(
            "echo \"  {} - {}\"",
            padded_name(command),
            double_quoted(&tool.spec.description)
        ));
        for alias in &tool.spec.aliases {
            lines.push(format!(
                "echo \"  {} - Alias for {}\"",
                padded_name(alias),
                double_quoted(command)
            ));
        }
    }

    lines.extend([
        "echo \"\"".to_string(),
        "echo \"Update tools:\"".to_string(),
        format!("echo \"  {}  - Pull latest from GitHub and reinstall\"", UPDATE_SCRIPT),
        "echo \"\"".to_string(),
        format!("echo \"Run with: docker run -it {} <command>\"", image_reference),
        format!("echo \"Interactive: docker run -it {} bash\"", image_reference),
    ]);

    echo_body(&lines)
}
