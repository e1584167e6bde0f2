//! Java toolchain check.

use crate::error::Result;
use crate::verifier::{Check, CheckContext, Severity};

/// `java` and `javac` report the expected version and `JAVA_HOME` is set.
pub struct JavaCheck;

impl Check for JavaCheck {
    fn name(&self) -> &str {
        "Java JDK"
    }

    fn description(&self) -> &str {
        "Java runtime and compiler at the expected version, JAVA_HOME set"
    }

    fn execute(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let config = ctx.config();
        let version = config.java.version.as_str();

        ctx.log(Severity::Info, "🔍 Checking Java installation...");

        let java = ctx.check_command(&config.commands.java, Some(version), "Java JDK");
        let javac = ctx.check_command(&config.commands.javac, Some(version), "Java Compiler");
        let home = ctx.check_environment_variable(&config.java.home_var, "Java Home");

        Ok(java && javac && home)
    }
}
