//! droidcheck - Verify an Appium Android automation workstation.
//!
//! droidcheck runs an ordered battery of checks against the local machine
//! (JDK, Node.js, Gradle, Android SDK, Appium and its driver, emulator images,
//! `appium-doctor`, and a live server startup probe) and prints a pass/fail
//! summary with the errors and warnings to fix.
//!
//! # Modules
//!
//! - [`artifacts`] - Test artifact directory preparation
//! - [`checks`] - The built-in checks and their run order
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `droidcheck.yml` schema and loading
//! - [`env`] - Environment variable lookup
//! - [`error`] - Error types and result aliases
//! - [`server`] - Automation server startup probe
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//! - [`verifier`] - Check orchestration and the summary report
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
//! let report = Verifier::new(&config).run_verification(&CheckRegistry::new(), &mut ui);
//!
//! assert!(report.all_passed());
//! assert!(ui.has_message("Overall: 0/0 checks passed"));
//! ```

pub mod artifacts;
pub mod checks;
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod server;
pub mod shell;
pub mod ui;
pub mod verifier;

pub use error::{Result, VerifyError};
