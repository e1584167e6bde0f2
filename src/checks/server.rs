//! Automation server startup check.

use crate::error::{Result, VerifyError};
use crate::server::{FailureCause, ProbeState, ServerProbe};
use crate::verifier::{Check, CheckContext, Severity};

/// Label used in server messages.
const SERVER: &str = "Appium Server";

/// The automation server starts and prints its ready banner in time.
pub struct ServerStartupCheck;

impl Check for ServerStartupCheck {
    fn name(&self) -> &str {
        "Appium Server Test"
    }

    fn description(&self) -> &str {
        "Appium server starts and reports its listener within the timeout"
    }

    fn execute(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let probe = ServerProbe::from_config(&ctx.config().server);

        ctx.log(Severity::Info, "🔍 Testing Appium Server startup...");

        let report = probe.run();
        if !report.terminated {
            tracing::warn!(command = %probe.command_line(), "server process may still be running");
        }

        let failure = match report.state {
            ProbeState::Succeeded => {
                ctx.log(Severity::Success, format!("{} - Started successfully", SERVER));
                return Ok(true);
            }
            ProbeState::TimedOut => {
                tracing::debug!(
                    timeout_ms = probe.startup_timeout().as_millis() as u64,
                    "server startup timed out"
                );
                VerifyError::ServerStartupTimeout {
                    server: SERVER.to_string(),
                }
            }
            ProbeState::Failed(FailureCause::ErrorOutput(output)) => {
                VerifyError::ServerStartupError {
                    server: SERVER.to_string(),
                    output: output.trim().to_string(),
                }
            }
            ProbeState::Failed(FailureCause::Exited(code)) => {
                let status = code
                    .map(|c| format!("exited with code {}", c))
                    .unwrap_or_else(|| "terminated by signal".to_string());
                VerifyError::ServerSpawnFailure {
                    server: SERVER.to_string(),
                    reason: format!("{} before becoming ready", status),
                }
            }
            ProbeState::Failed(FailureCause::Spawn(reason)) => VerifyError::ServerSpawnFailure {
                server: SERVER.to_string(),
                reason,
            },
            ProbeState::Waiting => {
                return Err(VerifyError::UnexpectedException {
                    check: self.name().to_string(),
                    message: "startup race finished without an outcome".to_string(),
                })
            }
        };

        ctx.fail(Severity::Error, failure);
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::run_one;
    use crate::config::VerifierConfig;
    use crate::env::EnvSource;

    #[cfg(unix)]
    fn config(script: &str, timeout_ms: u64) -> VerifierConfig {
        let mut config = VerifierConfig::default();
        config.server.command = "sh".to_string();
        config.server.args = vec!["-c".to_string(), script.to_string()];
        config.server.startup_timeout_ms = timeout_ms;
        config
    }

    #[cfg(unix)]
    #[test]
    fn ready_banner_passes() {
        let config = config(
            "echo '[Appium] Appium REST http interface listener started on http://0.0.0.0:4723'; exec sleep 30",
            5000,
        );
        let (report, ui) = run_one(ServerStartupCheck, &config, EnvSource::Process);

        assert!(report.all_passed());
        assert!(ui.has_success("Appium Server - Started successfully"));
    }

    #[cfg(unix)]
    #[test]
    fn address_in_use_fails() {
        let config = config(
            "echo 'Error: listen EADDRINUSE: address already in use 0.0.0.0:4723' >&2; exec sleep 30",
            5000,
        );
        let (report, _) = run_one(ServerStartupCheck, &config, EnvSource::Process);

        assert!(!report.all_passed());
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].starts_with("Appium Server - Error: Error: listen EADDRINUSE"));
    }

    #[cfg(unix)]
    #[test]
    fn silent_server_times_out() {
        let config = config("exec sleep 30", 200);
        let (report, _) = run_one(ServerStartupCheck, &config, EnvSource::Process);

        assert_eq!(report.errors(), ["Appium Server - Startup timeout"]);
    }

    #[cfg(unix)]
    #[test]
    fn early_exit_fails_to_start() {
        let config = config("exit 3", 5000);
        let (report, _) = run_one(ServerStartupCheck, &config, EnvSource::Process);

        assert_eq!(
            report.errors(),
            ["Appium Server - Failed to start: exited with code 3 before becoming ready"]
        );
    }

    #[test]
    fn missing_server_binary_fails_to_start() {
        let mut config = VerifierConfig::default();
        config.server.command = "droidcheck-no-such-server-binary".to_string();
        let (report, _) = run_one(ServerStartupCheck, &config, EnvSource::Process);

        assert!(!report.all_passed());
        assert!(report.errors()[0].starts_with("Appium Server - Failed to start:"));
    }
}
