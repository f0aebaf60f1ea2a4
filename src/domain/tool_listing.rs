//! Tabular summary of configured tools.

use serde::Serialize;

use crate::domain::ToolsConfig;

const DESCRIPTION_WIDTH: usize = 30;
const RULE_WIDTH: usize = 60;

/// One row of `cli-tools list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub enabled: bool,
    pub command: String,
    pub description: String,
}

impl ToolSummary {
    pub fn enabled_label(&self) -> &'static str {
        if self.enabled { "Yes" } else { "No" }
    }
}

/// Summaries for every configured tool, enabled or not, in declaration order.
pub fn summarize(config: &ToolsConfig) -> Vec<ToolSummary> {
    config
        .tools
        .iter()
        .map(|tool| ToolSummary {
            name: tool.name.clone(),
            enabled: tool.is_enabled(),
            command: tool.spec.command.clone(),
            description: tool.spec.description.chars().take(DESCRIPTION_WIDTH).collect(),
        })
        .collect()
}

/// Render summaries as the fixed-width table printed by `list`.
pub fn render_table(rows: &[ToolSummary]) -> String {
    let mut out = String::new();
    out.push_str("Available CLI Tools:\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!("{:<20} {:<10} {:<15} {}\n", "Tool", "Enabled", "Command", "Description"));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for row in rows {
        let line = format!(
            "{:<20} {:<10} {:<15} {}",
            row.name,
            row.enabled_label(),
            row.command,
            row.description
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
