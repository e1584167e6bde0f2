//! Verification orchestration.
//!
//! The [`Verifier`] runs every check in a [`CheckRegistry`] strictly in
//! order, one at a time. A check that errors or panics is logged and
//! recorded as failed; the loop always continues with the next check.
//!
//! # Modules
//!
//! - [`check`] - The [`Check`] trait and ordered registry
//! - [`context`] - Check primitives and the severity-tagged log
//! - [`report`] - Results and the summary report
//!
//! # Example
//!
//! ```
//! use droidcheck::config::VerifierConfig;
//! use droidcheck::ui::MockUI;
//! use droidcheck::verifier::{CheckRegistry, Verifier};
//!
//! let config = VerifierConfig::default();
//! let mut ui = MockUI::new();
//! let report = Verifier::new(&config).run(&CheckRegistry::new(), &mut ui);
//! assert!(report.results().is_empty());
//! ```

pub mod check;
pub mod context;
pub mod report;

pub use check::{Check, CheckRegistry};
pub use context::CheckContext;
pub use report::{CheckResult, Severity, VerificationReport};

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

use crate::config::VerifierConfig;
use crate::env::EnvSource;
use crate::error::VerifyError;
use crate::ui::UserInterface;

thread_local! {
    static IN_CHECK: Cell<bool> = const { Cell::new(false) };
}

static PANIC_HOOK: Once = Once::new();

/// Runs a battery of checks and collects the outcome.
pub struct Verifier<'a> {
    config: &'a VerifierConfig,
    env: EnvSource,
}

impl<'a> Verifier<'a> {
    /// Create a verifier reading the process environment.
    pub fn new(config: &'a VerifierConfig) -> Self {
        Self {
            config,
            env: EnvSource::Process,
        }
    }

    /// Use a specific environment variable source.
    pub fn with_env(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    /// Run every check in order and return the report snapshot.
    pub fn run(&self, registry: &CheckRegistry, ui: &mut dyn UserInterface) -> VerificationReport {
        let mut results = Vec::with_capacity(registry.len());
        let mut ctx = CheckContext::new(ui, self.config, &self.env);

        for check in registry.iter() {
            let started = Instant::now();
            let outcome = run_isolated(|| check.execute(&mut ctx));

            let passed = match outcome {
                Ok(Ok(passed)) => {
                    ctx.print("");
                    passed
                }
                Ok(Err(e @ VerifyError::UnexpectedException { .. })) => {
                    ctx.fail(Severity::Error, e);
                    false
                }
                Ok(Err(e)) => {
                    ctx.fail(
                        Severity::Error,
                        VerifyError::UnexpectedException {
                            check: check.name().to_string(),
                            message: e.to_string(),
                        },
                    );
                    false
                }
                Err(payload) => {
                    ctx.fail(
                        Severity::Error,
                        VerifyError::UnexpectedException {
                            check: check.name().to_string(),
                            message: panic_message(payload.as_ref()),
                        },
                    );
                    false
                }
            };

            tracing::debug!(
                check = check.name(),
                passed,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "check finished"
            );
            results.push(CheckResult::new(check.name(), passed));
        }

        let (errors, warnings) = ctx.into_messages();
        VerificationReport::new(results, errors, warnings)
    }

    /// Announce the run, execute it, and print the summary.
    pub fn run_verification(
        &self,
        registry: &CheckRegistry,
        ui: &mut dyn UserInterface,
    ) -> VerificationReport {
        ui.message("🚀 Starting Appium Mobile Automation Setup Verification...");
        ui.message("");

        let report = self.run(registry, ui);
        report.render(ui);
        report
    }
}

/// Run `f` with panics caught.
///
/// Panics inside `f` are reported through tracing instead of the default
/// hook, so a failing check does not spray a backtrace over the report.
/// Panics on other threads still reach the previous hook.
fn run_isolated<T>(f: impl FnOnce() -> T) -> std::thread::Result<T> {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_CHECK.with(Cell::get) {
                tracing::debug!(%info, "check panicked");
            } else {
                previous(info);
            }
        }));
    });

    IN_CHECK.with(|flag| flag.set(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    IN_CHECK.with(|flag| flag.set(false));
    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "check panicked".to_string()
    }
}
