//! Build command: write `Dockerfile.generated` and run the image builder against it.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::commands::generate;
use crate::domain::dockerfile::ENTRYPOINT_SCRIPT;
use crate::domain::{AppError, ToolsConfig};
use crate::ports::{BuildRequest, BuildStatus, ImageBuilder, TemplateRenderer};

/// File the build path always writes, relative to the build context.
pub const GENERATED_DOCKERFILE: &str = "Dockerfile.generated";

/// Result of a build attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub dockerfile: PathBuf,
    pub image: String,
    pub enabled_tools: Vec<String>,
    pub status: BuildStatus,
}

/// Generated build file ready to be handed to the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedBuild {
    pub request: BuildRequest,
    pub enabled_tools: Vec<String>,
}

/// Write the build file into `context_dir` and describe the build to run.
pub fn prepare<R: TemplateRenderer, B: ImageBuilder>(
    ctx: &AppContext<R, B>,
    config: &ToolsConfig,
    context_dir: &Path,
) -> Result<PreparedBuild, AppError> {
    let dockerfile = generated_dockerfile_path(context_dir);
    let generated = generate::execute(config, &dockerfile, ctx.renderer())?;

    if !context_dir.join(ENTRYPOINT_SCRIPT).exists() {
        tracing::warn!(
            context = %context_dir.display(),
            "{} not found in build context; the COPY step will fail",
            ENTRYPOINT_SCRIPT
        );
    }

    Ok(PreparedBuild {
        request: BuildRequest {
            tag: config.image_reference(),
            dockerfile,
            context_dir: context_dir.to_path_buf(),
        },
        enabled_tools: generated.enabled_tools,
    })
}

/// `Dockerfile.generated` inside `context_dir`, without a `./` prefix for the current directory.
fn generated_dockerfile_path(context_dir: &Path) -> PathBuf {
    if context_dir == Path::new(".") || context_dir.as_os_str().is_empty() {
        PathBuf::from(GENERATED_DOCKERFILE)
    } else {
        context_dir.join(GENERATED_DOCKERFILE)
    }
}

/// Run the builder for a prepared build.
///
/// A non-zero builder exit is reported through `BuildStatus::Failed`, not as an error.
pub fn run<R: TemplateRenderer, B: ImageBuilder>(
    ctx: &AppContext<R, B>,
    prepared: PreparedBuild,
) -> Result<BuildOutcome, AppError> {
    let status = ctx.builder().build(&prepared.request)?;

    Ok(BuildOutcome {
        dockerfile: prepared.request.dockerfile,
        image: prepared.request.tag,
        enabled_tools: prepared.enabled_tools,
        status,
    })
}

/// Execute the build command.
pub fn execute<R: TemplateRenderer, B: ImageBuilder>(
    ctx: &AppContext<R, B>,
    config: &ToolsConfig,
    context_dir: &Path,
) -> Result<BuildOutcome, AppError> {
    let prepared = prepare(ctx, config, context_dir)?;
    run(ctx, prepared)
}
