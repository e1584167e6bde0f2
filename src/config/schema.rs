//! Configuration schema definitions for droidcheck.
//!
//! This module contains all the struct definitions that map to
//! the `droidcheck.yml` file format. Every field is optional; the defaults
//! describe a stock Appium + UiAutomator2 workstation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for droidcheck.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Java toolchain expectations
    pub java: JavaConfig,

    /// Android SDK layout
    pub android: AndroidConfig,

    /// Appium CLI expectations
    pub appium: AppiumConfig,

    /// Commands run by the tool checks
    pub commands: ToolCommands,

    /// Automation server startup probe
    pub server: ServerConfig,

    /// Test artifact directories
    pub artifacts: ArtifactsConfig,
}

/// Java toolchain expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaConfig {
    /// Substring expected in `java -version` and `javac -version` output
    pub version: String,

    /// Variable that must point at the JDK
    pub home_var: String,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            version: "17".to_string(),
            home_var: "JAVA_HOME".to_string(),
        }
    }
}

/// Android SDK layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// Variable that must point at the SDK root
    pub home_var: String,

    /// Subdirectories of the SDK root that must exist
    pub required_dirs: Vec<RequiredDir>,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            home_var: "ANDROID_HOME".to_string(),
            required_dirs: vec![
                RequiredDir::from_path("platform-tools"),
                RequiredDir::from_path("build-tools"),
            ],
        }
    }
}

/// A directory under the SDK root, with the label used in the report.
///
/// In YAML either a bare path (`platform-tools`, labelled "Platform Tools")
/// or a `{ path, description }` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RequiredDirEntry")]
pub struct RequiredDir {
    /// Path relative to the SDK root
    pub path: PathBuf,

    /// Label shown in check messages
    pub description: String,
}

impl RequiredDir {
    /// Create a required directory entry.
    pub fn new(path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
        }
    }

    /// Entry labelled from its last path component: `build-tools` becomes
    /// "Build Tools".
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let description = label_for(&path);
        Self { path, description }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RequiredDirEntry {
    Path(PathBuf),
    Labeled {
        path: PathBuf,
        description: Option<String>,
    },
}

impl From<RequiredDirEntry> for RequiredDir {
    fn from(entry: RequiredDirEntry) -> Self {
        match entry {
            RequiredDirEntry::Path(path)
            | RequiredDirEntry::Labeled {
                path,
                description: None,
            } => Self::from_path(path),
            RequiredDirEntry::Labeled {
                path,
                description: Some(description),
            } => Self::new(path, description),
        }
    }
}

fn label_for(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    name.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Appium CLI expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppiumConfig {
    /// Driver that `appium driver list` should report
    pub driver: String,

    /// Name shown in driver messages (defaults from `driver`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AppiumConfig {
    /// Display name of the driver, e.g. `UIAutomator2` for `uiautomator2`.
    pub fn driver_label(&self) -> &str {
        if let Some(label) = &self.label {
            return label;
        }
        match self.driver.as_str() {
            "uiautomator2" => "UIAutomator2",
            "espresso" => "Espresso",
            "xcuitest" => "XCUITest",
            other => other,
        }
    }
}

impl Default for AppiumConfig {
    fn default() -> Self {
        Self {
            driver: "uiautomator2".to_string(),
            label: None,
        }
    }
}

/// Shell commands run by the tool checks.
///
/// Overriding these lets a workstation point at non-PATH installs, e.g.
/// `java: "$JAVA_HOME/bin/java -version"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCommands {
    pub java: String,
    pub javac: String,
    pub node: String,
    pub npm: String,
    pub gradle: String,
    pub adb: String,
    pub appium: String,
    pub appium_drivers: String,
    pub appium_doctor: String,
    pub emulator_list: String,
}

impl Default for ToolCommands {
    fn default() -> Self {
        Self {
            java: "java -version".to_string(),
            javac: "javac -version".to_string(),
            node: "node --version".to_string(),
            npm: "npm --version".to_string(),
            gradle: "gradle --version".to_string(),
            adb: "adb version".to_string(),
            appium: "appium --version".to_string(),
            appium_drivers: "appium driver list".to_string(),
            appium_doctor: "appium-doctor".to_string(),
            emulator_list: "emulator -list-avds".to_string(),
        }
    }
}

/// Automation server startup probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server executable (spawned directly, not through a shell)
    pub command: String,

    /// Arguments passed to the server
    pub args: Vec<String>,

    /// Stdout substring that means the server is listening
    pub ready_banner: String,

    /// Stderr substrings that mean startup failed
    pub error_markers: Vec<String>,

    /// How long to wait for either banner
    pub startup_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            command: "appium".to_string(),
            args: vec!["--session-override".to_string()],
            ready_banner: "Appium REST http interface listener started".to_string(),
            error_markers: vec!["Error".to_string(), "EADDRINUSE".to_string()],
            startup_timeout_ms: 10_000,
        }
    }
}

/// Test artifact directories, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Root directory for artifacts
    pub root: PathBuf,

    /// Subdirectories created under the root
    pub dirs: Vec<PathBuf>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("artifacts"),
            dirs: vec![PathBuf::from("screenshots"), PathBuf::from("videos")],
        }
    }
}
