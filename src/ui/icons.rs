//! Status vocabulary for summary lines.

use super::theme::CheckTheme;

/// Status of a single summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Pass,
    /// Check failed.
    Fail,
}

impl StatusKind {
    /// Map a check outcome to its status.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Fail => "✗",
        }
    }

    /// Fixed-width label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }

    /// Format a status line: styled icon and label + message.
    pub fn format(self, theme: &CheckTheme, msg: &str) -> String {
        let tag = format!("{} {}", self.icon(), self.label());
        let styled = match self {
            Self::Pass => theme.success.apply_to(tag).to_string(),
            Self::Fail => theme.error.apply_to(tag).to_string(),
        };
        format!("{} {}", styled, msg)
    }
}
