//! Configuration file discovery and loading.

use crate::config::schema::VerifierConfig;
use crate::error::{Result, VerifyError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "droidcheck.yml";

/// Find the project config at `<root>/droidcheck.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into VerifierConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VerifierConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VerifyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VerifyError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into VerifierConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VerifierConfig> {
    if content.trim().is_empty() {
        return Ok(VerifierConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| VerifyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Without one, `droidcheck.yml` in the
/// project root is used when present, otherwise the built-in defaults.
pub fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<VerifierConfig> {
    match explicit {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading explicit config");
            load_config_file(path)
        }
        None => match find_project_config(project_root) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading project config");
                load_config_file(&path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(VerifierConfig::default())
            }
        },
    }
}
