//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use crate::config::schema::{GuardConfig, RuntimeMode};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {name} value {value:?}")]
    InvalidOverride { name: &'static str, value: String },
}

/// Load configuration from a TOML file and apply environment overrides.
pub fn load_config(path: &Path) -> Result<GuardConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: GuardConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;

    Ok(config)
}

/// Apply environment overrides. The lookup is injected so the override
/// logic stays testable without mutating the process environment.
///
/// - `MAX_FILE_SIZE` overrides `limits.max_file_size` (integer bytes).
/// - `NODE_ENV=development` switches the runtime mode. The variable name
///   is kept for compatibility with deployments that already set it, even
///   though this is not a Node process.
pub fn apply_env_overrides<F>(config: &mut GuardConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup("MAX_FILE_SIZE") {
        let parsed = raw.parse::<u64>().map_err(|_| ConfigError::InvalidOverride {
            name: "MAX_FILE_SIZE",
            value: raw,
        })?;
        config.limits.max_file_size = parsed;
    }

    if let Some(env) = lookup("NODE_ENV") {
        if env == "development" {
            config.mode = RuntimeMode::Development;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn max_file_size_override_applies() {
        let mut config = GuardConfig::default();
        apply_env_overrides(&mut config, lookup_from(&[("MAX_FILE_SIZE", "2048")])).unwrap();
        assert_eq!(config.limits.max_file_size, 2048);
    }

    #[test]
    fn node_env_development_switches_mode() {
        let mut config = GuardConfig::default();
        apply_env_overrides(&mut config, lookup_from(&[("NODE_ENV", "development")])).unwrap();
        assert!(config.mode.is_development());
    }

    #[test]
    fn node_env_other_values_stay_production() {
        let mut config = GuardConfig::default();
        apply_env_overrides(&mut config, lookup_from(&[("NODE_ENV", "staging")])).unwrap();
        assert_eq!(config.mode, RuntimeMode::Production);
    }

    #[test]
    fn no_overrides_leave_defaults() {
        let mut config = GuardConfig::default();
        apply_env_overrides(&mut config, lookup_from(&[])).unwrap();
        assert_eq!(config.limits.max_file_size, 10_485_760);
        assert_eq!(config.mode, RuntimeMode::Production);
    }

    #[test]
    fn malformed_max_file_size_is_rejected() {
        let mut config = GuardConfig::default();
        let err =
            apply_env_overrides(&mut config, lookup_from(&[("MAX_FILE_SIZE", "ten")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverride { .. }));
    }
}
