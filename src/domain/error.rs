use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for cli-tools operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file does not exist at the given path.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration content could not be parsed.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Every configured tool is disabled (or none are configured).
    #[error("No tools enabled in configuration!")]
    NoEnabledTools,

    /// `init` would overwrite an existing configuration.
    #[error("Config file already exists: {} (use --force to overwrite)", .0.display())]
    ConfigExists(PathBuf),

    /// Template registration or rendering failed.
    #[error("Template error in '{template}': {details}")]
    Template { template: String, details: String },

    /// Builder program could not be started.
    #[error("Failed to launch '{program}': {source}")]
    BuilderLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn template<S: Into<String>, D: ToString>(template: S, details: D) -> Self {
        AppError::Template { template: template.into(), details: details.to_string() }
    }

    /// Closest `io::ErrorKind` for this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::BuilderLaunch { source, .. } => source.kind(),
            AppError::ConfigNotFound(_) => io::ErrorKind::NotFound,
            AppError::ConfigExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Yaml(_) | AppError::NoEnabledTools => io::ErrorKind::InvalidInput,
            AppError::Template { .. } | AppError::Json(_) => io::ErrorKind::InvalidData,
        }
    }
}
