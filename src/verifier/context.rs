//! Check primitives and the severity-tagged log.
//!
//! A [`CheckContext`] is handed to every check. It owns the error and
//! warning lists for the run, so every message logged at those severities
//! lands in exactly one list exactly once.

use std::path::Path;

use crate::config::VerifierConfig;
use crate::env::EnvSource;
use crate::error::{Result, VerifyError};
use crate::shell::{self, CommandOptions, CommandResult};
use crate::ui::UserInterface;

use super::report::Severity;

/// Shared state and helpers available to checks during a run.
pub struct CheckContext<'a> {
    ui: &'a mut dyn UserInterface,
    config: &'a VerifierConfig,
    env: &'a EnvSource,
    command_options: CommandOptions,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl<'a> CheckContext<'a> {
    /// Create a context for one verification run.
    pub fn new(
        ui: &'a mut dyn UserInterface,
        config: &'a VerifierConfig,
        env: &'a EnvSource,
    ) -> Self {
        let command_options = match env {
            EnvSource::Process => CommandOptions::default(),
            // Fixed variables are layered over the inherited environment, so
            // PATH still resolves the tools.
            EnvSource::Fixed(vars) => CommandOptions {
                env: vars.clone(),
                ..Default::default()
            },
        };

        Self {
            ui,
            config,
            env,
            command_options,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Effective configuration.
    pub fn config(&self) -> &'a VerifierConfig {
        self.config
    }

    /// Environment variable source.
    pub fn env(&self) -> &'a EnvSource {
        self.env
    }

    /// Log a message, recording errors and warnings for the summary.
    pub fn log(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Info => self.ui.info(&message),
            Severity::Success => self.ui.success(&message),
            Severity::Warning => {
                self.ui.warning(&message);
                self.warnings.push(message);
            }
            Severity::Error => {
                self.ui.error(&message);
                self.errors.push(message);
            }
        }
    }

    /// Log a check failure through its `Display` message.
    pub fn fail(&mut self, severity: Severity, err: VerifyError) {
        self.log(severity, err.to_string());
    }

    /// Print a line without severity (headings, raw tool output).
    pub fn print(&mut self, line: &str) {
        self.ui.message(line);
    }

    /// Run a command and return its captured result without logging.
    pub fn run(&self, command: &str) -> Result<CommandResult> {
        shell::execute(command, &self.command_options)
    }

    /// Run `command` and judge it by exit status or, when
    /// `expected_version` is given, by a substring match on its output.
    ///
    /// A version mismatch is a warning; a command that cannot run or exits
    /// non-zero is an error. Both return `false`.
    pub fn check_command(
        &mut self,
        command: &str,
        expected_version: Option<&str>,
        description: &str,
    ) -> bool {
        let result = match self.run(command) {
            Ok(result) if result.success => result,
            outcome => {
                let reason = match outcome {
                    Ok(result) => result.failure_reason(),
                    Err(e) => e.to_string(),
                };
                self.fail(
                    Severity::Error,
                    VerifyError::ToolMissing {
                        tool: description.to_string(),
                        reason,
                    },
                );
                return false;
            }
        };

        match expected_version {
            None => {
                self.log(Severity::Success, format!("{} - Found", description));
                true
            }
            Some(expected) => {
                let output = result.combined_output();
                if output.contains(expected) {
                    self.log(
                        Severity::Success,
                        format!("{} - Version check passed", description),
                    );
                    true
                } else {
                    self.fail(
                        Severity::Warning,
                        VerifyError::VersionMismatch {
                            tool: description.to_string(),
                            expected: expected.to_string(),
                        },
                    );
                    self.log(
                        Severity::Info,
                        format!("Actual output: {}", output.trim()),
                    );
                    false
                }
            }
        }
    }

    /// Pass iff `name` is set to a non-empty value.
    pub fn check_environment_variable(&mut self, name: &str, description: &str) -> bool {
        match self.env.var(name) {
            Some(value) => {
                self.log(
                    Severity::Success,
                    format!("{} ({}): {}", description, name, value),
                );
                true
            }
            None => {
                self.fail(
                    Severity::Error,
                    VerifyError::EnvVarUnset {
                        description: description.to_string(),
                        name: name.to_string(),
                    },
                );
                false
            }
        }
    }

    /// Pass iff `path` exists.
    pub fn check_directory(&mut self, path: &Path, description: &str) -> bool {
        if path.exists() {
            self.log(
                Severity::Success,
                format!("{}: {}", description, path.display()),
            );
            true
        } else {
            self.fail(
                Severity::Error,
                VerifyError::PathNotFound {
                    description: description.to_string(),
                    path: path.to_path_buf(),
                },
            );
            false
        }
    }

    /// Hand over the collected errors and warnings.
    pub(crate) fn into_messages(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn with_context<F>(env: EnvSource, f: F) -> (MockUI, Vec<String>, Vec<String>)
    where
        F: FnOnce(&mut CheckContext<'_>),
    {
        let mut ui = MockUI::new();
        let config = VerifierConfig::default();
        let (errors, warnings) = {
            let mut ctx = CheckContext::new(&mut ui, &config, &env);
            f(&mut ctx);
            ctx.into_messages()
        };
        (ui, errors, warnings)
    }

    #[test]
    fn command_without_version_passes_on_zero_exit() {
        let (ui, errors, _) = with_context(EnvSource::Process, |ctx| {
            assert!(ctx.check_command("echo v0.0.1-anything", None, "Node.js"));
        });
        assert!(ui.has_success("Node.js - Found"));
        assert!(errors.is_empty());
    }

    #[test]
    fn command_failure_is_an_error() {
        let (_, errors, warnings) = with_context(EnvSource::Process, |ctx| {
            assert!(!ctx.check_command("exit 127", None, "Gradle"));
        });
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Gradle - Not found or failed"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_binary_is_an_error() {
        let (_, errors, _) = with_context(EnvSource::Process, |ctx| {
            assert!(!ctx.check_command(
                "droidcheck-definitely-not-a-real-binary --version",
                None,
                "Missing Tool"
            ));
        });
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn version_match_passes() {
        let (ui, errors, warnings) = with_context(EnvSource::Process, |ctx| {
            assert!(ctx.check_command("echo openjdk 17.0.9", Some("17"), "Java JDK"));
        });
        assert!(ui.has_success("Java JDK - Version check passed"));
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn version_on_stderr_is_matched() {
        let (_, errors, warnings) = with_context(EnvSource::Process, |ctx| {
            assert!(ctx.check_command(
                "echo 'openjdk version \"17.0.9\"' >&2",
                Some("17"),
                "Java JDK"
            ));
        });
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn version_mismatch_is_a_warning_not_an_error() {
        let (ui, errors, warnings) = with_context(EnvSource::Process, |ctx| {
            assert!(!ctx.check_command("echo openjdk 11.0.2", Some("17"), "Java JDK"));
        });
        assert!(errors.is_empty());
        assert_eq!(warnings, ["Java JDK - Version mismatch. Expected: 17"]);
        assert!(ui.has_info("Actual output: openjdk 11.0.2"));
    }

    #[test]
    fn env_var_set_passes() {
        let env = EnvSource::fixed([("JAVA_HOME", "/usr/lib/jvm/17")]);
        let (ui, errors, _) = with_context(env, |ctx| {
            assert!(ctx.check_environment_variable("JAVA_HOME", "Java Home"));
        });
        assert!(ui.has_success("Java Home (JAVA_HOME): /usr/lib/jvm/17"));
        assert!(errors.is_empty());
    }

    #[test]
    fn env_var_unset_is_an_error() {
        let (_, errors, _) = with_context(EnvSource::Fixed(HashMap::new()), |ctx| {
            assert!(!ctx.check_environment_variable("ANDROID_HOME", "Android SDK Home"));
        });
        assert_eq!(errors, ["Android SDK Home (ANDROID_HOME) - Not set"]);
    }

    #[cfg(unix)]
    #[test]
    fn fixed_variables_reach_commands_alongside_path() {
        let env = EnvSource::fixed([("DROIDCHECK_FIXED", "from-fixture")]);
        let (_, errors, warnings) = with_context(env, |ctx| {
            let result = ctx.run("echo $DROIDCHECK_FIXED").unwrap();
            assert_eq!(result.stdout.trim(), "from-fixture");
            // PATH comes from the inherited environment.
            assert!(ctx.check_command("ls /", None, "ls"));
        });
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn directory_checks() {
        let temp = TempDir::new().unwrap();
        let present = temp.path().to_path_buf();
        let absent = temp.path().join("build-tools");

        let (_, errors, _) = with_context(EnvSource::Process, |ctx| {
            assert!(ctx.check_directory(&present, "Platform Tools"));
            assert!(!ctx.check_directory(&absent, "Build Tools"));
        });
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Build Tools: "));
        assert!(errors[0].ends_with(" - Not found"));
    }

    #[test]
    fn info_and_success_are_not_recorded() {
        let (ui, errors, warnings) = with_context(EnvSource::Process, |ctx| {
            ctx.log(Severity::Info, "Checking things...");
            ctx.log(Severity::Success, "Thing found");
        });
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
        assert!(ui.has_info("Checking things"));
    }
}
