//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{execute, forward_lines, CommandOptions, CommandResult, OutputLine};
pub use platform::{detect_shell, shell_flag};
