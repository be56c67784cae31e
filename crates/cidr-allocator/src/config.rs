//! Allocator configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::SubnetPlanner`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Suggestions returned when the caller does not set a limit
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Prefix lengths offered to users when picking a subnet size
    #[serde(default = "default_offered_prefixes")]
    pub offered_prefixes: Vec<u8>,
}

fn default_max_suggestions() -> usize {
    crate::defaults::MAX_SUGGESTIONS
}

fn default_offered_prefixes() -> Vec<u8> {
    crate::defaults::OFFERED_PREFIXES.collect()
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            offered_prefixes: default_offered_prefixes(),
        }
    }
}

impl AllocatorConfig {
    /// Create config from environment variables
    ///
    /// - `CIDR_MAX_SUGGESTIONS`: integer
    /// - `CIDR_OFFERED_PREFIXES`: comma separated prefix lengths, e.g. `20,24,28`
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let max_suggestions = std::env::var("CIDR_MAX_SUGGESTIONS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_else(default_max_suggestions);

        let offered_prefixes = std::env::var("CIDR_OFFERED_PREFIXES")
            .ok()
            .and_then(|v| parse_prefix_list(&v))
            .unwrap_or_else(default_offered_prefixes);

        Self {
            max_suggestions,
            offered_prefixes,
        }
    }

    /// Load config from TOML text; missing keys take defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject prefix lengths that cannot exist
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self.offered_prefixes.iter().find(|p| **p > 32) {
            return Err(Error::Config(format!(
                "offered prefix /{} exceeds 32",
                bad
            )));
        }
        Ok(())
    }
}

fn parse_prefix_list(value: &str) -> Option<Vec<u8>> {
    let prefixes = value
        .split(',')
        .map(|p| p.trim().trim_start_matches('/').parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;

    if prefixes.is_empty() || prefixes.iter().any(|p| *p > 32) {
        None
    } else {
        Some(prefixes)
    }
}
