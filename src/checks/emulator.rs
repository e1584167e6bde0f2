//! Android emulator check.

use crate::error::Result;
use crate::verifier::{Check, CheckContext, Severity};

/// At least one Android Virtual Device exists.
pub struct EmulatorCheck;

/// AVD names from `emulator -list-avds` output, one per non-blank line.
pub fn parse_avd_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl Check for EmulatorCheck {
    fn name(&self) -> &str {
        "Android Emulator"
    }

    fn description(&self) -> &str {
        "At least one Android Virtual Device configured"
    }

    fn execute(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let command = &ctx.config().commands.emulator_list;

        ctx.log(Severity::Info, "🔍 Checking Android Emulator...");

        let result = match ctx.run(command) {
            Ok(result) if result.success => result,
            Ok(result) => {
                ctx.log(
                    Severity::Error,
                    format!("Emulator check failed: {}", result.failure_reason()),
                );
                return Ok(false);
            }
            Err(e) => {
                ctx.log(Severity::Error, format!("Emulator check failed: {}", e));
                return Ok(false);
            }
        };

        let avds = parse_avd_list(&result.stdout);
        if avds.is_empty() {
            ctx.log(Severity::Warning, "No Android Virtual Devices found");
            ctx.log(
                Severity::Info,
                "Create an AVD in Android Studio or using avdmanager",
            );
            return Ok(false);
        }

        ctx.log(
            Severity::Success,
            format!("Found {} AVD(s): {}", avds.len(), avds.join(", ")),
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{missing, run_one};
    use crate::config::VerifierConfig;
    use crate::env::EnvSource;

    #[test]
    fn parse_skips_blank_lines() {
        assert_eq!(
            parse_avd_list("Pixel_6_API_33\n\n  Tablet_AVD_API33  \n"),
            ["Pixel_6_API_33", "Tablet_AVD_API33"]
        );
        assert!(parse_avd_list("\n   \n").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn lists_found_avds() {
        let mut config = VerifierConfig::default();
        config.commands.emulator_list = "printf 'Pixel_6\\nNexus_10\\n'".to_string();
        let (report, ui) = run_one(EmulatorCheck, &config, EnvSource::Process);

        assert!(report.all_passed());
        assert!(ui.has_success("Found 2 AVD(s): Pixel_6, Nexus_10"));
    }

    #[test]
    fn no_avds_is_a_warning() {
        let mut config = VerifierConfig::default();
        config.commands.emulator_list = "exit 0".to_string();
        let (report, ui) = run_one(EmulatorCheck, &config, EnvSource::Process);

        assert!(!report.all_passed());
        assert!(report.errors().is_empty());
        assert_eq!(report.warnings(), ["No Android Virtual Devices found"]);
        assert!(ui.has_info("avdmanager"));
    }

    #[test]
    fn missing_emulator_is_an_error() {
        let mut config = VerifierConfig::default();
        config.commands.emulator_list = missing();
        let (report, _) = run_one(EmulatorCheck, &config, EnvSource::Process);

        assert!(!report.all_passed());
        assert!(report.errors()[0].starts_with("Emulator check failed"));
    }
}
