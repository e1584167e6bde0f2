//! Appium Doctor check.

use crate::error::Result;
use crate::verifier::{Check, CheckContext, Severity};

/// `appium-doctor` runs and reports no failed checks.
pub struct AppiumDoctorCheck;

fn doctor_passed(output: &str) -> bool {
    output.contains('✔') || output.contains("All checks passed")
}

impl Check for AppiumDoctorCheck {
    fn name(&self) -> &str {
        "Appium Doctor"
    }

    fn description(&self) -> &str {
        "appium-doctor reports a healthy Android setup"
    }

    fn execute(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let command = &ctx.config().commands.appium_doctor;

        ctx.log(Severity::Info, "🔍 Running Appium Doctor...");

        let result = match ctx.run(command) {
            Ok(result) if result.success => result,
            Ok(result) => {
                ctx.log(
                    Severity::Error,
                    format!("Appium Doctor failed: {}", result.failure_reason()),
                );
                return Ok(false);
            }
            Err(e) => {
                ctx.log(Severity::Error, format!("Appium Doctor failed: {}", e));
                return Ok(false);
            }
        };

        let output = result.combined_output();
        if doctor_passed(&output) {
            ctx.log(Severity::Success, "Appium Doctor - All checks passed");
            return Ok(true);
        }

        ctx.log(Severity::Warning, "Appium Doctor - Some checks failed");
        ctx.log(Severity::Info, "Full Appium Doctor output:");
        for line in output.lines() {
            ctx.print(line);
        }
        Ok(false)
    }
}
