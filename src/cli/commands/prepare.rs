//! Prepare command implementation.
//!
//! The `droidcheck prepare` command creates the directories test runs write
//! screenshots and recordings into.

use crate::artifacts::prepare_artifacts;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectPaths};

/// The prepare command implementation.
pub struct PrepareCommand {
    paths: ProjectPaths,
}

impl PrepareCommand {
    /// Create a new prepare command.
    pub fn new(paths: &ProjectPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }
}

impl Command for PrepareCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.paths.load_config()?;
        let dirs = prepare_artifacts(&self.paths.root, &config.artifacts)?;

        for dir in &dirs {
            ui.success(&format!("Artifact directory ready: {}", dir.display()));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn creates_screenshot_and_video_dirs() {
        let temp = TempDir::new().unwrap();
        let paths = ProjectPaths {
            root: temp.path().to_path_buf(),
            config: None,
        };
        let cmd = PrepareCommand::new(&paths);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(temp.path().join("artifacts/screenshots").is_dir());
        assert!(temp.path().join("artifacts/videos").is_dir());
        assert_eq!(ui.successes().len(), 3);
    }

    #[test]
    fn running_twice_is_harmless() {
        let temp = TempDir::new().unwrap();
        let paths = ProjectPaths {
            root: temp.path().to_path_buf(),
            config: None,
        };
        let cmd = PrepareCommand::new(&paths);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
    }
}
