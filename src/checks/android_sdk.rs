//! Android SDK check.

use std::path::Path;

use crate::error::Result;
use crate::verifier::{Check, CheckContext, Severity};

/// The SDK root variable is set, its required subdirectories exist, and
/// `adb` runs.
///
/// With the variable unset there is nothing to look under, so the
/// directory and `adb` checks are skipped.
pub struct AndroidSdkCheck;

impl Check for AndroidSdkCheck {
    fn name(&self) -> &str {
        "Android SDK"
    }

    fn description(&self) -> &str {
        "ANDROID_HOME set, platform-tools and build-tools present, adb available"
    }

    fn execute(&self, ctx: &mut CheckContext<'_>) -> Result<bool> {
        let config = ctx.config();
        let home_var = config.android.home_var.as_str();

        ctx.log(Severity::Info, "🔍 Checking Android SDK installation...");

        if !ctx.check_environment_variable(home_var, "Android SDK Home") {
            return Ok(false);
        }
        let Some(home) = ctx.env().var(home_var) else {
            return Ok(false);
        };
        let home = Path::new(&home);

        let mut dirs_present = true;
        for dir in &config.android.required_dirs {
            dirs_present &= ctx.check_directory(&home.join(&dir.path), &dir.description);
        }
        let adb = ctx.check_command(&config.commands.adb, None, "ADB (Android Debug Bridge)");

        Ok(dirs_present && adb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{echo, missing, run_one};
    use crate::config::VerifierConfig;
    use crate::env::EnvSource;
    use std::fs;
    use tempfile::TempDir;

    fn sdk(with: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for dir in with {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        temp
    }

    fn env_for(sdk: &TempDir) -> EnvSource {
        EnvSource::fixed([("ANDROID_HOME", sdk.path().to_string_lossy().to_string())])
    }

    #[test]
    fn unset_home_fails_and_names_sdk_home() {
        let mut config = VerifierConfig::default();
        config.commands.adb = echo("Android Debug Bridge version 1.0.41");
        let (report, ui) = run_one(AndroidSdkCheck, &config, EnvSource::fixed([("LANG", "C")]));

        assert!(!report.result("Android SDK").unwrap().passed());
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].contains("Android SDK Home"));
        assert!(!ui.has_success("ADB"));
        assert_eq!(report.passed_count(), 0);
    }

    #[test]
    fn complete_sdk_passes() {
        let sdk = sdk(&["platform-tools", "build-tools"]);
        let mut config = VerifierConfig::default();
        config.commands.adb = echo("Android Debug Bridge version 1.0.41");
        let (report, ui) = run_one(AndroidSdkCheck, &config, env_for(&sdk));

        assert!(report.all_passed());
        assert!(ui.has_success("Platform Tools: "));
        assert!(ui.has_success("Build Tools: "));
        assert!(ui.has_success("ADB (Android Debug Bridge) - Found"));
    }

    #[test]
    fn missing_build_tools_fails_but_still_checks_adb() {
        let sdk = sdk(&["platform-tools"]);
        let mut config = VerifierConfig::default();
        config.commands.adb = echo("Android Debug Bridge version 1.0.41");
        let (report, ui) = run_one(AndroidSdkCheck, &config, env_for(&sdk));

        assert!(!report.all_passed());
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].starts_with("Build Tools: "));
        assert!(ui.has_success("ADB (Android Debug Bridge) - Found"));
    }

    #[test]
    fn missing_adb_fails() {
        let sdk = sdk(&["platform-tools", "build-tools"]);
        let mut config = VerifierConfig::default();
        config.commands.adb = missing();
        let (report, _) = run_one(AndroidSdkCheck, &config, env_for(&sdk));

        assert!(!report.all_passed());
        assert!(report.errors()[0].starts_with("ADB (Android Debug Bridge) - Not found"));
    }
}
