//! Test artifact directories.
//!
//! Test runs drop screenshots and recordings under `artifacts/`. The
//! directories are created up front so hooks never race on them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ArtifactsConfig;
use crate::error::Result;

/// Create the configured artifact directories under `project_root`.
///
/// Existing directories are left alone. Returns every directory that
/// exists afterwards, root first.
pub fn prepare_artifacts(project_root: &Path, config: &ArtifactsConfig) -> Result<Vec<PathBuf>> {
    let root = project_root.join(&config.root);
    let mut prepared = Vec::with_capacity(config.dirs.len() + 1);

    fs::create_dir_all(&root)?;
    prepared.push(root.clone());

    for dir in &config.dirs {
        let path = root.join(dir);
        if !path.is_dir() {
            tracing::debug!(path = %path.display(), "creating artifact directory");
        }
        fs::create_dir_all(&path)?;
        prepared.push(path);
    }

    Ok(prepared)
}
