//! Container image builder port.

use std::path::PathBuf;

use crate::domain::AppError;

/// Arguments of one image build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Image reference (`name:tag`).
    pub tag: String,
    pub dockerfile: PathBuf,
    /// Build context directory.
    pub context_dir: PathBuf,
}

/// How the builder process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Succeeded,
    /// Non-zero exit; `None` when the process was terminated by a signal.
    Failed { exit_code: Option<i32> },
}

impl BuildStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildStatus::Succeeded)
    }
}

/// Trait for running an external image build.
pub trait ImageBuilder {
    /// Run the build to completion.
    ///
    /// A builder that starts but exits non-zero yields `BuildStatus::Failed`;
    /// only a failure to start it is an error.
    fn build(&self, request: &BuildRequest) -> Result<BuildStatus, AppError>;
}
