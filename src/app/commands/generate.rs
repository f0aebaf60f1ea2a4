//! Generate command: render the build file and write it to disk.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, ToolsConfig, render_dockerfile};
use crate::ports::TemplateRenderer;

/// Output path used when `--output` is not given.
pub const DEFAULT_OUTPUT_PATH: &str = "Dockerfile.generated";

/// Result of writing a build file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub output: PathBuf,
    pub enabled_tools: Vec<String>,
}

/// Render the build file for the enabled tools and write it to `output`.
///
/// Fails with `NoEnabledTools` before touching the filesystem when nothing is enabled.
pub fn execute<R: TemplateRenderer>(
    config: &ToolsConfig,
    output: &Path,
    renderer: &R,
) -> Result<GenerateOutcome, AppError> {
    let enabled_tools: Vec<String> =
        config.enabled_tools().iter().map(|tool| tool.name.clone()).collect();
    if enabled_tools.is_empty() {
        return Err(AppError::NoEnabledTools);
    }

    let content = render_dockerfile(config, renderer)?;
    std::fs::write(output, content)?;
    tracing::info!(path = %output.display(), tools = enabled_tools.len(), "wrote build file");

    Ok(GenerateOutcome { output: output.to_path_buf(), enabled_tools })
}
