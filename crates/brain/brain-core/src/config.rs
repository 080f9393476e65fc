//! Brain configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

/// Env var naming the brain backend to open.
pub const BRAIN_ENV: &str = "BRAIN";

/// Brain selection configuration interface.
pub trait BrainConfig: Send + Sync {
    /// Backend name to resolve. Empty means the registry picks its only backend.
    fn brain_name(&self) -> &str;
}

/// Brain config loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvBrainConfig {
    pub brain_name: String,
}

impl BrainConfig for EnvBrainConfig {
    fn brain_name(&self) -> &str {
        &self.brain_name
    }
}

impl EnvBrainConfig {
    /// Load from environment variables (BRAIN). Unset or blank selects the default backend.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_value(env::var(BRAIN_ENV).ok()))
    }

    pub(crate) fn from_value(value: Option<String>) -> Self {
        let brain_name = value
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        Self { brain_name }
    }

    /// Config that always selects `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            brain_name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_unset_is_empty() {
        assert_eq!(EnvBrainConfig::from_value(None).brain_name(), "");
    }

    #[test]
    fn test_from_value_trims_whitespace() {
        let config = EnvBrainConfig::from_value(Some("  memory \n".to_string()));
        assert_eq!(config.brain_name(), "memory");
    }

    #[test]
    fn test_from_value_blank_is_empty() {
        let config = EnvBrainConfig::from_value(Some("   ".to_string()));
        assert_eq!(config, EnvBrainConfig::default());
    }

    #[test]
    fn test_named() {
        assert_eq!(EnvBrainConfig::named("redis").brain_name(), "redis");
    }
}
