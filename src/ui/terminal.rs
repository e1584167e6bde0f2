//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, CheckTheme, OutputMode, StatusKind, UserInterface};

/// Terminal UI implementation writing to stdout or stderr.
pub struct TerminalUI {
    term: Term,
    theme: CheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI on stdout.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_term(Term::stdout(), mode)
    }

    /// Create a terminal UI on stderr, leaving stdout for machine output.
    pub fn stderr(mode: OutputMode) -> Self {
        Self::with_term(Term::stderr(), mode)
    }

    fn with_term(term: Term, mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CheckTheme::new()
        } else {
            CheckTheme::plain()
        };

        Self { term, theme, mode }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "{}", kind.format(&self.theme, msg)).ok();
    }
}

/// Create the terminal UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
