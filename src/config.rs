//! Configuration management
//!
//! Loads configuration from config.toml with support for:
//! - Subgraph query endpoint
//! - Reward API base URL
//! - Tenant (app) identifier
//! - Request timeout
//!
//! The tenant id is handed explicitly to `CompletionResolver` at
//! construction; nothing reads this config at query time.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::TenantContext;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub subgraph: SubgraphConfig,
    pub rewards: RewardsConfig,
}

/// Subgraph query endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubgraphConfig {
    /// Query endpoint URL
    pub endpoint: String,
    /// App id scoping every query
    pub app_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Reward API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsConfig {
    /// Base URL of the reward API (`/api/reward` is appended)
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Load from config.toml or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load from specific path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            // Use embedded default config
            toml::from_str(DEFAULT_CONFIG).context("Failed to parse default config")
        }
    }

    /// Tenant scope for the resolver
    pub fn tenant(&self) -> TenantContext {
        TenantContext::new(&self.subgraph.app_id)
    }

    pub fn subgraph_timeout(&self) -> Duration {
        Duration::from_secs(self.subgraph.timeout_secs)
    }

    pub fn rewards_timeout(&self) -> Duration {
        Duration::from_secs(self.rewards.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        // The embedded default config is validated at compile time,
        // so this should never fail. Using a fallback for robustness.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            subgraph: SubgraphConfig {
                endpoint: "http://localhost:8000/subgraph".to_string(),
                app_id: String::new(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            rewards: RewardsConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let config = Config::default();
        assert!(!config.subgraph.endpoint.is_empty());
        assert!(!config.rewards.base_url.is_empty());
    }

    #[test]
    fn test_parse_overrides_and_timeout_default() {
        let config: Config = toml::from_str(
            r#"
            [subgraph]
            endpoint = "https://indexer.example/query"
            app_id = "0xAPP"

            [rewards]
            base_url = "https://rewards.example"
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.subgraph.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.rewards_timeout(), Duration::from_secs(5));
        assert_eq!(config.tenant().as_str(), "0xapp");
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = Config::load_from("does-not-exist.toml").unwrap();
        assert!(!config.subgraph.endpoint.is_empty());
    }
}
