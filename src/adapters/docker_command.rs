use std::process::Command;

use crate::domain::AppError;
use crate::ports::{BuildRequest, BuildStatus, ImageBuilder};

/// Default builder executable.
pub const DEFAULT_DOCKER_PROGRAM: &str = "docker";

/// Runs `<program> build -t <tag> -f <dockerfile> <context>` with inherited stdio.
#[derive(Debug, Clone)]
pub struct DockerCommandBuilder {
    program: String,
}

impl DockerCommandBuilder {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    fn command(&self, request: &BuildRequest) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("build")
            .arg("-t")
            .arg(&request.tag)
            .arg("-f")
            .arg(&request.dockerfile)
            .arg(&request.context_dir);
        command
    }
}

impl Default for DockerCommandBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_DOCKER_PROGRAM)
    }
}

impl ImageBuilder for DockerCommandBuilder {
    fn build(&self, request: &BuildRequest) -> Result<BuildStatus, AppError> {
        let mut command = self.command(request);
        tracing::debug!(?command, "running image build");

        let status = command
            .status()
            .map_err(|source| AppError::BuilderLaunch { program: self.program.clone(), source })?;

        if status.success() {
            Ok(BuildStatus::Succeeded)
        } else {
            tracing::debug!(code = ?status.code(), "image build exited unsuccessfully");
            Ok(BuildStatus::Failed { exit_code: status.code() })
        }
    }
}
