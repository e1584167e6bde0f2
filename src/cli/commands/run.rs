//! Run command implementation.
//!
//! The `droidcheck run` command executes every registered check and prints
//! the summary. It is also what a bare `droidcheck` does.

use std::io::Write;

use anyhow::Context;

use crate::checks::builtin_registry;
use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::ui::{TerminalUI, UserInterface};
use crate::verifier::Verifier;

use super::dispatcher::{Command, CommandResult, ProjectPaths};

/// Exit code for `--strict` runs with failed checks.
pub const STRICT_FAILURE_EXIT_CODE: i32 = 2;

/// The run command implementation.
pub struct RunCommand {
    paths: ProjectPaths,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(paths: &ProjectPaths, args: RunArgs) -> Self {
        Self {
            paths: paths.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.paths.load_config()?;
        if let Some(ms) = self.args.server_timeout {
            config.server.startup_timeout_ms = ms;
        }

        let registry = builtin_registry();
        for name in &self.args.skip {
            let known = registry
                .iter()
                .any(|c| c.name().eq_ignore_ascii_case(name.trim()));
            if !known {
                ui.warning(&format!("Unknown check '{}' ignored by --skip", name));
            }
        }
        let registry = registry.without(&self.args.skip);
        tracing::debug!(checks = registry.len(), "starting verification");

        let verifier = Verifier::new(&config);
        let report = if self.args.json {
            // stdout carries the JSON document only.
            let mut progress = TerminalUI::stderr(ui.output_mode());
            let report = verifier.run_verification(&registry, &mut progress);
            let json = report.to_json().context("failed to serialize report")?;
            writeln!(std::io::stdout(), "{}", json)?;
            report
        } else {
            verifier.run_verification(&registry, ui)
        };

        if self.args.strict && !report.all_passed() {
            return Ok(CommandResult::failure(STRICT_FAILURE_EXIT_CODE));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Every check passes except the emulator, which lists no AVDs, and the
    // server, which is missing. PATH stands in for a JDK home that is always set.
    const CONFIG: &str = r#"
java:
  home_var: PATH
commands:
  java: "echo 'openjdk version \"17.0.9\"'"
  javac: "echo 'javac 17.0.9'"
  node: "echo v20.11.0"
  npm: "echo 10.2.4"
  gradle: "echo 'Gradle 8.5'"
  adb: "echo 'Android Debug Bridge version 1.0.41'"
  appium: "echo 2.5.1"
  appium_drivers: "echo '- uiautomator2@3.0.1 [installed (npm)]'"
  appium_doctor: "echo 'All checks passed'"
  emulator_list: "exit 0"
server:
  command: droidcheck-no-such-server-binary
"#;

    fn setup_project(config_content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("droidcheck.yml"), config_content).unwrap();
        temp
    }

    fn paths(root: &Path) -> ProjectPaths {
        ProjectPaths {
            root: root.to_path_buf(),
            config: None,
        }
    }

    #[test]
    fn run_command_args() {
        let args = RunArgs {
            skip: vec!["Gradle".to_string()],
            ..Default::default()
        };
        let cmd = RunCommand::new(&paths(Path::new("/test")), args);
        assert_eq!(cmd.args().skip, ["Gradle"]);
    }

    #[test]
    fn skipped_checks_are_not_reported() {
        let temp = setup_project(CONFIG);
        let args = RunArgs {
            skip: vec!["appium server test".to_string(), "Android SDK".to_string()],
            ..Default::default()
        };
        let cmd = RunCommand::new(&paths(temp.path()), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let reported: Vec<_> = ui.statuses().iter().map(|(_, m)| m.as_str()).collect();
        assert_eq!(
            reported,
            [
                "Java JDK",
                "Node.js",
                "Gradle",
                "Appium",
                "Android Emulator",
                "Appium Doctor"
            ]
        );
        assert!(ui.has_message("Overall: 5/6 checks passed"));
    }

    #[test]
    fn unknown_skip_name_warns() {
        let temp = setup_project(CONFIG);
        let args = RunArgs {
            skip: vec![
                "Cocoapods".to_string(),
                "Android SDK".to_string(),
                "Appium Server Test".to_string(),
            ],
            ..Default::default()
        };
        let cmd = RunCommand::new(&paths(temp.path()), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_warning("Unknown check 'Cocoapods'"));
    }

    #[test]
    fn failures_exit_zero_by_default() {
        let temp = setup_project(CONFIG);
        let cmd = RunCommand::new(&paths(temp.path()), RunArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.has_message("Some issues found"));
    }

    #[test]
    fn strict_run_exits_two_on_failure() {
        let temp = setup_project(CONFIG);
        let args = RunArgs {
            skip: vec!["Android SDK".to_string()],
            strict: true,
            ..Default::default()
        };
        let cmd = RunCommand::new(&paths(temp.path()), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, STRICT_FAILURE_EXIT_CODE);
    }

    #[test]
    fn strict_run_passes_when_everything_passes() {
        let temp = setup_project(CONFIG);
        let args = RunArgs {
            skip: vec![
                "Android SDK".to_string(),
                "Android Emulator".to_string(),
                "Appium Server Test".to_string(),
            ],
            strict: true,
            ..Default::default()
        };
        let cmd = RunCommand::new(&paths(temp.path()), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("All checks passed!"));
    }

    #[cfg(unix)]
    #[test]
    fn server_timeout_flag_overrides_config() {
        let temp = setup_project(
            "server:\n  command: sh\n  args: [\"-c\", \"exec sleep 30\"]\n  startup_timeout_ms: 60000\n",
        );
        let args = RunArgs {
            skip: vec![
                "Java JDK".to_string(),
                "Node.js".to_string(),
                "Gradle".to_string(),
                "Android SDK".to_string(),
                "Appium".to_string(),
                "Android Emulator".to_string(),
                "Appium Doctor".to_string(),
            ],
            server_timeout: Some(200),
            ..Default::default()
        };
        let cmd = RunCommand::new(&paths(temp.path()), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_error("Appium Server - Startup timeout"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = setup_project("server: [not, a, map]\n");
        let cmd = RunCommand::new(&paths(temp.path()), RunArgs::default());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }
}
