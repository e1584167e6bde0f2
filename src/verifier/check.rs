//! Check definitions.
//!
//! This module provides the core trait and the ordered registry:
//!
//! - [`Check`] - The trait that every verification check implements
//! - [`CheckRegistry`] - Checks in the order they run and are reported

use crate::error::Result;

use super::context::CheckContext;

/// One independent environment verification step.
///
/// `Ok(false)` is an ordinary failure the check has already explained
/// through the context log. `Err` means the check could not reach a
/// verdict; the verifier logs it and records the check as failed.
pub trait Check {
    /// Name shown in the summary.
    fn name(&self) -> &str;

    /// One-line description shown by `list`.
    fn description(&self) -> &str;

    /// Run the check.
    fn execute(&self, ctx: &mut CheckContext<'_>) -> Result<bool>;
}

/// Ordered list of checks for a run.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check; checks run in registration order.
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, check: Box<dyn Check>) -> Self {
        self.register(check);
        self
    }

    /// Drop checks whose name matches any entry in `names` (case-insensitive).
    pub fn without(mut self, names: &[String]) -> Self {
        self.checks.retain(|check| {
            !names
                .iter()
                .any(|n| n.trim().eq_ignore_ascii_case(check.name()))
        });
        self
    }

    /// Get a check by name.
    pub fn get(&self, name: &str) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Iterate over checks in run order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
