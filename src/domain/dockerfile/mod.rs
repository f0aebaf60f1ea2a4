//! Build-file generation: maps a `ToolsConfig` onto the Dockerfile template.

mod scripts;

use serde::Serialize;

use crate::domain::packages::{BROWSER_EXECUTABLE, FeatureFlags, resolve_packages};
use crate::domain::{AppError, Tool, ToolsConfig};
use crate::ports::TemplateRenderer;

pub use scripts::{echo_argument, help_script, single_quoted, update_script};

/// Template the build file is rendered from.
pub const DOCKERFILE_TEMPLATE: &str = "Dockerfile.j2";
/// Parent directory of every cloned tool inside the image.
pub const TOOLS_ROOT: &str = "/opt/cli-tools";
/// Directory wrapper scripts are written to.
pub const BIN_DIR: &str = "/usr/local/bin";
pub const UPDATE_SCRIPT: &str = "update-cli-tools";
pub const HELP_SCRIPT: &str = "cli-tools-help";
/// Startup script copied from the build context.
pub const ENTRYPOINT_SCRIPT: &str = "entrypoint.sh";

/// Values the Dockerfile template is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DockerfileContext {
    pub tool_names: Vec<String>,
    pub base_image: String,
    pub packages: Vec<String>,
    pub system_browser: bool,
    pub browser_executable: &'static str,
    pub tools_root: &'static str,
    pub bin_dir: &'static str,
    pub clone_lines: Vec<String>,
    pub install_steps: Vec<InstallStep>,
    pub wrappers: Vec<WrapperScript>,
    pub update_script_name: &'static str,
    pub update_script: String,
    pub help_script_name: &'static str,
    pub help_script: String,
    pub entrypoint: &'static str,
}

/// Per-tool install block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallStep {
    pub name: String,
    pub workdir: String,
    pub install: String,
    pub post_install: Option<String>,
}

/// One executable written to `BIN_DIR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapperScript {
    pub name: String,
    pub comment: String,
    pub workdir: String,
    pub exec: String,
}

impl DockerfileContext {
    pub fn from_config(config: &ToolsConfig) -> Self {
        let tools = config.enabled_tools();
        let flags = FeatureFlags::detect(&tools);

        Self {
            tool_names: tools.iter().map(|tool| tool.name.clone()).collect(),
            base_image: config.base.from_image(),
            packages: resolve_packages(&tools, &config.system_packages),
            system_browser: flags.system_browser,
            browser_executable: BROWSER_EXECUTABLE,
            tools_root: TOOLS_ROOT,
            bin_dir: BIN_DIR,
            clone_lines: clone_lines(&tools),
            install_steps: tools
                .iter()
                .map(|tool| InstallStep {
                    name: tool.name.clone(),
                    workdir: tool_dir(tool),
                    install: tool.install_command(&config.base).to_string(),
                    post_install: tool.post_install().map(str::to_string),
                })
                .collect(),
            wrappers: tools
                .iter()
                .flat_map(|tool| wrappers(tool, &config.base.run_command))
                .collect(),
            update_script_name: UPDATE_SCRIPT,
            update_script: update_script(&tools, &config.base),
            help_script_name: HELP_SCRIPT,
            help_script: help_script(&tools, &config.image_reference()),
            entrypoint: ENTRYPOINT_SCRIPT,
        }
    }
}

/// Render the complete build file for the enabled tools of `config`.
pub fn render_dockerfile<R: TemplateRenderer>(
    config: &ToolsConfig,
    renderer: &R,
) -> Result<String, AppError> {
    let context = DockerfileContext::from_config(config);
    renderer.render(DOCKERFILE_TEMPLATE, &context)
}

fn tool_dir(tool: &Tool) -> String {
    format!("{}/{}", TOOLS_ROOT, tool.local_name())
}

/// Lines of the single combined `RUN git clone` instruction.
fn clone_lines(tools: &[&Tool]) -> Vec<String> {
    let last = tools.len().saturating_sub(1);
    tools
        .iter()
        .enumerate()
        .map(|(index, tool)| {
            let clone = if tool.has_custom_clone_dir() {
                format!("git clone {} {}", tool.spec.repo, tool.local_name())
            } else {
                format!("git clone {}", tool.spec.repo)
            };
            let prefix = if index == 0 { "RUN " } else { "    " };
            let suffix = if index < last { " && \\" } else { "" };
            format!("{}{}{}", prefix, clone, suffix)
        })
        .collect()
}

fn wrappers(tool: &Tool, run_command: &str) -> Vec<WrapperScript> {
    let command = &tool.spec.command;
    let workdir = tool_dir(tool);

    std::iter::once((command, format!("{} wrapper", command)))
        .chain(
            tool.spec
                .aliases
                .iter()
                .map(|alias| (alias, format!("{} wrapper (alias for {})", alias, command))),
        )
        .map(|(name, comment)| WrapperScript {
            name: name.clone(),
            comment,
            workdir: echo_argument(&workdir),
            exec: echo_argument(&format!("{} {}", run_command, name)),
        })
        .collect()
}
