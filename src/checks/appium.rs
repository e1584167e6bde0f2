//! Appium CLI check.

use crate::error::Result;
use crate::verifier::{Check, CheckContext, Severity};

/// The Appium CLI runs. The configured driver is looked up in
/// `appium driver list` as a soft signal only.
pub struct AppiumCheck;

impl Check for AppiumCheck {
    fn name(&self) -> &str {
        "Appium"
    }

    fn description(&self) -> &str {
        "Appium CLI available, UiAutomator2 driver installed"
    }

    fn execute(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let config = ctx.config();

        ctx.log(Severity::Info, "🔍 Checking Appium installation...");

        let appium = ctx.check_command(&config.commands.appium, None, "Appium Server");
        if appium {
            let driver = config.appium.driver.as_str();
            let label = config.appium.driver_label();
            match ctx.run(&config.commands.appium_drivers) {
                Ok(result) if result.success => {
                    // Appium 2 prints the driver table on stderr.
                    if result.combined_output().contains(driver) {
                        ctx.log(Severity::Success, format!("{} driver - Installed", label));
                    } else {
                        ctx.log(
                            Severity::Warning,
                            format!("{} driver - Not installed", label),
                        );
                    }
                }
                Ok(result) => {
                    tracing::debug!(reason = %result.failure_reason(), "driver list failed");
                    ctx.log(Severity::Warning, "Failed to check Appium drivers");
                }
                Err(e) => {
                    tracing::debug!(error = %e, "driver list failed");
                    ctx.log(Severity::Warning, "Failed to check Appium drivers");
                }
            }
        }

        Ok(appium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{echo, missing, run_one};
    use crate::config::VerifierConfig;
    use crate::env::EnvSource;

    fn config(appium: String, drivers: String) -> VerifierConfig {
        let mut config = VerifierConfig::default();
        config.commands.appium = appium;
        config.commands.appium_drivers = drivers;
        config
    }

    #[test]
    fn installed_driver_is_reported() {
        let config = config(echo("2.5.1"), echo("- uiautomator2@3.0.1 [installed (npm)]"));
        let (report, ui) = run_one(AppiumCheck, &config, EnvSource::Process);

        assert!(report.all_passed());
        assert!(ui.has_success("UIAutomator2 driver - Installed"));
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn missing_driver_warns_without_failing() {
        let config = config(echo("2.5.1"), echo("- xcuitest [not installed]"));
        let (report, _) = run_one(AppiumCheck, &config, EnvSource::Process);

        assert!(report.all_passed());
        assert_eq!(report.warnings(), ["UIAutomator2 driver - Not installed"]);
    }

    #[test]
    fn custom_driver_uses_its_label() {
        let mut config = config(echo("2.5.1"), echo("- espresso@2.0.0 [installed (npm)]"));
        config.appium.driver = "espresso".to_string();
        let (report, ui) = run_one(AppiumCheck, &config, EnvSource::Process);

        assert!(report.all_passed());
        assert!(ui.has_success("Espresso driver - Installed"));
    }

    #[test]
    fn failing_driver_list_warns_without_failing() {
        let config = config(echo("2.5.1"), "exit 1".to_string());
        let (report, _) = run_one(AppiumCheck, &config, EnvSource::Process);

        assert!(report.all_passed());
        assert_eq!(report.warnings(), ["Failed to check Appium drivers"]);
    }

    #[test]
    fn missing_appium_skips_driver_lookup() {
        let config = config(missing(), echo("uiautomator2"));
        let (report, ui) = run_one(AppiumCheck, &config, EnvSource::Process);

        assert!(!report.all_passed());
        assert!(report.errors()[0].starts_with("Appium Server - Not found"));
        assert!(!ui.has_success("driver"));
        assert!(report.warnings().is_empty());
    }
}
