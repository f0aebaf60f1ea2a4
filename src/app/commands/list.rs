//! List command: summarize every configured tool.

use crate::domain::ToolsConfig;
use crate::domain::tool_listing::{ToolSummary, summarize};

/// Execute the list command.
///
/// Disabled tools are included; nothing is written to disk.
pub fn execute(config: &ToolsConfig) -> Vec<ToolSummary> {
    summarize(config)
}
