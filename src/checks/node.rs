//! Node.js toolchain check.

use crate::error::Result;
use crate::verifier::{Check, CheckContext, Severity};

/// `node` and `npm` run.
pub struct NodeCheck;

impl Check for NodeCheck {
    fn name(&self) -> &str {
        "Node.js"
    }

    fn description(&self) -> &str {
        "Node.js runtime and npm available"
    }

    fn execute(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let commands = &ctx.config().commands;

        ctx.log(Severity::Info, "🔍 Checking Node.js installation...");

        let node = ctx.check_command(&commands.node, None, "Node.js");
        let npm = ctx.check_command(&commands.npm, None, "NPM");

        Ok(node && npm)
    }
}
