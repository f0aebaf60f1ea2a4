//! Init command: write a starter configuration and entrypoint.

use std::path::{Path, PathBuf};

use crate::adapters::scaffold_assets::{STARTER_CONFIG, STARTER_ENTRYPOINT, scaffold_file_content};
use crate::domain::AppError;
use crate::domain::dockerfile::ENTRYPOINT_SCRIPT;

/// Files written by `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub config: PathBuf,
    /// `None` when an existing entrypoint was left in place.
    pub entrypoint: Option<PathBuf>,
}

/// Execute the init command.
///
/// The entrypoint is written next to `config_path`, which is where the build
/// context expects it.
pub fn execute(config_path: &Path, force: bool) -> Result<InitOutcome, AppError> {
    if config_path.exists() && !force {
        return Err(AppError::ConfigExists(config_path.to_path_buf()));
    }

    let config_content = embedded(STARTER_CONFIG)?;
    let entrypoint_content = embedded(STARTER_ENTRYPOINT)?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, config_content)?;

    let entrypoint_path = config_path.with_file_name(ENTRYPOINT_SCRIPT);
    let entrypoint = if entrypoint_path.exists() && !force {
        tracing::debug!(path = %entrypoint_path.display(), "keeping existing entrypoint");
        None
    } else {
        std::fs::write(&entrypoint_path, entrypoint_content)?;
        make_executable(&entrypoint_path)?;
        Some(entrypoint_path)
    };

    Ok(InitOutcome { config: config_path.to_path_buf(), entrypoint })
}

fn embedded(name: &str) -> Result<&'static str, AppError> {
    scaffold_file_content(name).ok_or_else(|| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("embedded scaffold file missing: {}", name),
        ))
    })
}

fn make_executable(path: &Path) -> Result<(), AppError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
