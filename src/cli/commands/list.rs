//! List command implementation.
//!
//! The `droidcheck list` command lists the checks in the order they run.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use crate::checks::builtin_registry;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::{should_use_colors, CheckTheme, UserInterface};
use crate::verifier::CheckRegistry;

use super::dispatcher::{Command, CommandResult, ProjectPaths};

/// The list command implementation.
pub struct ListCommand {
    paths: ProjectPaths,
    args: ListArgs,
}

#[derive(Serialize)]
struct ListedCheck<'a> {
    name: &'a str,
    description: &'a str,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(paths: &ProjectPaths, args: ListArgs) -> Self {
        Self {
            paths: paths.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn print_json(registry: &CheckRegistry) -> Result<()> {
        let listed: Vec<_> = registry
            .iter()
            .map(|c| ListedCheck {
                name: c.name(),
                description: c.description(),
            })
            .collect();
        let json = serde_json::to_string_pretty(&listed).context("failed to serialize checks")?;
        writeln!(std::io::stdout(), "{}", json)?;
        Ok(())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // A broken config file is reported here too, before any run.
        let config = self.paths.load_config()?;
        let registry = builtin_registry();

        if self.args.json {
            Self::print_json(&registry)?;
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            CheckTheme::new()
        } else {
            CheckTheme::plain()
        };

        ui.message(&format!("  {}", theme.header.apply_to("Checks:")));
        for (index, check) in registry.iter().enumerate() {
            ui.message(&format!(
                "    {}. {}",
                index + 1,
                theme.highlight.apply_to(check.name())
            ));
            ui.message(&format!("       {}", theme.dim.apply_to(check.description())));
        }

        ui.message("");
        ui.message(&format!(
            "  {} {} {}",
            theme.dim.apply_to("Server:"),
            config.server.command,
            config.server.args.join(" ")
        ));

        Ok(CommandResult::success())
    }
}
