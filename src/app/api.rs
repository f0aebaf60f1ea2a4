//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{DockerCommandBuilder, EmbeddedTemplateRenderer};
use crate::app::commands::{build, generate, init, list};
use crate::app::{AppContext, config};

pub use crate::app::commands::build::{BuildOutcome, GENERATED_DOCKERFILE, PreparedBuild};
pub use crate::app::commands::generate::{DEFAULT_OUTPUT_PATH, GenerateOutcome};
pub use crate::app::commands::init::InitOutcome;
pub use crate::app::config::DEFAULT_CONFIG_PATH;
pub use crate::domain::{AppError, ToolSummary, ToolsConfig};
pub use crate::ports::BuildStatus;

fn create_context(
    docker_program: &str,
) -> Result<AppContext<EmbeddedTemplateRenderer, DockerCommandBuilder>, AppError> {
    Ok(AppContext::new(EmbeddedTemplateRenderer::new()?, DockerCommandBuilder::new(docker_program)))
}

/// Load a `cli-tools.yml` file.
pub fn load_config(path: &Path) -> Result<ToolsConfig, AppError> {
    config::load_tools_config(path)
}

/// Render the build file as a string without writing it.
pub fn render(config: &ToolsConfig) -> Result<String, AppError> {
    let renderer = EmbeddedTemplateRenderer::new()?;
    crate::domain::render_dockerfile(config, &renderer)
}

/// Generate the build file at `output` without building (dry run).
pub fn generate(config: &ToolsConfig, output: &Path) -> Result<GenerateOutcome, AppError> {
    let renderer = EmbeddedTemplateRenderer::new()?;
    generate::execute(config, output, &renderer)
}

/// Write `Dockerfile.generated` into the current directory without running the builder.
pub fn prepare_build(config: &ToolsConfig, docker_program: &str) -> Result<PreparedBuild, AppError> {
    let ctx = create_context(docker_program)?;
    build::prepare(&ctx, config, Path::new("."))
}

/// Run `docker_program build` for a prepared build.
pub fn run_build(prepared: PreparedBuild, docker_program: &str) -> Result<BuildOutcome, AppError> {
    let ctx = create_context(docker_program)?;
    build::run(&ctx, prepared)
}

/// Generate `Dockerfile.generated` in the current directory and build the image.
pub fn build(config: &ToolsConfig, docker_program: &str) -> Result<BuildOutcome, AppError> {
    build_at(Path::new("."), config, docker_program)
}

/// Generate and build using `context_dir` as the build context.
pub fn build_at(
    context_dir: &Path,
    config: &ToolsConfig,
    docker_program: &str,
) -> Result<BuildOutcome, AppError> {
    let ctx = create_context(docker_program)?;
    build::execute(&ctx, config, context_dir)
}

/// Summaries of every configured tool.
pub fn list(config: &ToolsConfig) -> Vec<ToolSummary> {
    list::execute(config)
}

/// Write a starter configuration at `config_path` and an entrypoint next to it.
pub fn init(config_path: &Path, force: bool) -> Result<InitOutcome, AppError> {
    init::execute(config_path, force)
}
