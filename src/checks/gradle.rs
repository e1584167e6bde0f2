//! Gradle check.

use crate::error::Result;
use crate::verifier::{Check, CheckContext, Severity};

/// `gradle --version` runs.
pub struct GradleCheck;

impl Check for GradleCheck {
    fn name(&self) -> &str {
        "Gradle"
    }

    fn description(&self) -> &str {
        "Gradle build tool available"
    }

    fn execute(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let command = &ctx.config().commands.gradle;
        ctx.log(Severity::Info, "🔍 Checking Gradle installation...");
        Ok(ctx.check_command(command, None, "Gradle"))
    }
}
