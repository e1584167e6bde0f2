//! Configuration loading and parsing for droidcheck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use droidcheck::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("droidcheck.yml"), "java:\n  version: \"21\"\n").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert_eq!(config.java.version, "21");
//! assert_eq!(config.server.startup_timeout_ms, 10_000);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{
    AndroidConfig, AppiumConfig, ArtifactsConfig, JavaConfig, RequiredDir, ServerConfig,
    ToolCommands, VerifierConfig,
};
