//! cli-tools: compile a `cli-tools.yml` catalogue into a Docker image of wrapped CLI tools.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BuildOutcome, BuildStatus, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH, GENERATED_DOCKERFILE,
    GenerateOutcome, InitOutcome, build, build_at, generate, init, list, load_config, render,
};
pub use domain::{AppError, Tool, ToolSpec, ToolSummary, ToolsConfig};
