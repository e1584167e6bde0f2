//! Environment variable lookup.
//!
//! Checks read variables through [`EnvSource`] so tests can supply a fixed
//! set without touching the process environment.

use std::collections::HashMap;

/// Where environment variables come from.
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// The current process environment.
    #[default]
    Process,
    /// A fixed map; variables not in it are unset.
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    /// Build a fixed source from key/value pairs.
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a variable. Empty values count as unset.
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match self {
            Self::Process => std::env::var(name).ok(),
            Self::Fixed(map) => map.get(name).cloned(),
        };
        value.filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_returns_value() {
        let env = EnvSource::fixed([("ANDROID_HOME", "/opt/android")]);
        assert_eq!(env.var("ANDROID_HOME").as_deref(), Some("/opt/android"));
        assert_eq!(env.var("JAVA_HOME"), None);
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let env = EnvSource::fixed([("JAVA_HOME", "")]);
        assert_eq!(env.var("JAVA_HOME"), None);
    }

    #[test]
    fn process_source_reads_real_environment() {
        std::env::set_var("DROIDCHECK_ENV_SOURCE_TEST", "yes");
        assert_eq!(
            EnvSource::Process
                .var("DROIDCHECK_ENV_SOURCE_TEST")
                .as_deref(),
            Some("yes")
        );
        std::env::remove_var("DROIDCHECK_ENV_SOURCE_TEST");
    }
}
