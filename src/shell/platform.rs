//! Platform-specific shell detection.

/// Detect the shell used to run check commands.
///
/// `DROIDCHECK_SHELL` overrides the platform default. The user's login
/// shell is deliberately not consulted: check commands are plain POSIX
/// (`java -version`, `adb version`) and must behave the same everywhere.
pub fn detect_shell() -> String {
    if let Ok(shell) = std::env::var("DROIDCHECK_SHELL") {
        if !shell.is_empty() {
            return shell;
        }
    }

    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass commands to the shell.
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn shell_flag_is_dash_c_on_unix() {
        assert_eq!(shell_flag(), "-c");
    }

    #[test]
    fn detect_shell_is_never_empty() {
        assert!(!detect_shell().is_empty());
    }

}
