//! Verification results and the summary report.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ui::{StatusKind, UserInterface};

/// Severity of a logged check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Progress or detail line.
    Info,
    /// Something was found and is usable.
    Success,
    /// Soft signal: worth reviewing, may still work.
    Warning,
    /// Hard failure that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Outcome of one check execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    name: String,
    passed: bool,
}

impl CheckResult {
    /// Record the outcome of a check.
    pub fn new(name: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            passed,
        }
    }

    /// Name of the check.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// Immutable snapshot of a finished verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    results: Vec<CheckResult>,
    errors: Vec<String>,
    warnings: Vec<String>,
    finished_at: DateTime<Utc>,
}

impl VerificationReport {
    pub(crate) fn new(
        results: Vec<CheckResult>,
        errors: Vec<String>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            results,
            errors,
            warnings,
            finished_at: Utc::now(),
        }
    }

    /// Per-check outcomes in execution order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Every message logged at error severity, in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Every message logged at warning severity, in order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// When the last check finished.
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Number of checks that passed.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.passed_count() == self.results.len()
    }

    /// Look up a result by check name.
    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// Render the human-readable summary.
    pub fn render(&self, ui: &mut dyn UserInterface) {
        ui.show_header("VERIFICATION SUMMARY");

        for result in &self.results {
            ui.show_status(StatusKind::from_passed(result.passed), &result.name);
        }

        ui.message("");
        ui.message(&format!(
            "Overall: {}/{} checks passed",
            self.passed_count(),
            self.results.len()
        ));

        if !self.errors.is_empty() {
            ui.message("");
            ui.message("ERRORS TO FIX:");
            for error in &self.errors {
                ui.message(&format!("   • {}", error));
            }
        }

        if !self.warnings.is_empty() {
            ui.message("");
            ui.message("WARNINGS:");
            for warning in &self.warnings {
                ui.message(&format!("   • {}", warning));
            }
        }

        ui.message("");
        if self.all_passed() {
            ui.message("🎉 All checks passed! Your mobile automation setup is ready!");
        } else {
            ui.message("🔧 Some issues found. Please address the errors and warnings above.");
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
