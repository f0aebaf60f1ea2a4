use std::path::Path;

use crate::domain::{AppError, ToolsConfig};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "cli-tools.yml";

/// Load and parse a `cli-tools.yml` file.
///
/// Parser errors are returned unchanged; no validation beyond the schema is applied.
pub fn load_tools_config(path: &Path) -> Result<ToolsConfig, AppError> {
    if !path.exists() {
        return Err(AppError::ConfigNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: ToolsConfig = serde_yaml::from_str(&content)?;

    tracing::debug!(
        path = %path.display(),
        tools = config.tools.len(),
        enabled = config.enabled_tools().len(),
        "loaded configuration"
    );
    Ok(config)
}
