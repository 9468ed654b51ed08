//! Per-network endpoint overrides.

use serde::Deserialize;

use crate::domain::{Network, NetworkProfile, NetworkProfiles};
use crate::error::{ConfigError, Result};

/// Optional replacements for a network's built-in endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworkOverrides {
    pub rpc_url: Option<String>,
    pub api_base_url: Option<String>,
    pub explorer_base_url: Option<String>,
}

impl NetworkOverrides {
    /// Replace the fields of `profile` that this override sets.
    #[must_use]
    pub fn apply(&self, mut profile: NetworkProfile) -> NetworkProfile {
        if let Some(url) = &self.rpc_url {
            profile.rpc_url.clone_from(url);
        }
        if let Some(url) = &self.api_base_url {
            profile.api_base_url.clone_from(url);
        }
        if let Some(url) = &self.explorer_base_url {
            profile.explorer_base_url.clone_from(url);
        }
        profile
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("rpc_url", &self.rpc_url),
            ("api_base_url", &self.api_base_url),
            ("explorer_base_url", &self.explorer_base_url),
        ] {
            if let Some(value) = value {
                url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                    field,
                    reason: e.to_string(),
                })?;
            }
        }
        Ok(())
    }
}

/// `[networks.testnet]` and `[networks.mainnet]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworksConfig {
    pub testnet: NetworkOverrides,
    pub mainnet: NetworkOverrides,
}

impl NetworksConfig {
    /// Built-in profiles with overrides applied.
    #[must_use]
    pub fn profiles(&self) -> NetworkProfiles {
        NetworkProfiles::new(
            self.testnet
                .apply(NetworkProfile::builtin(Network::Testnet)),
            self.mainnet
                .apply(NetworkProfile::builtin(Network::Mainnet)),
        )
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.testnet.validate()?;
        self.mainnet.validate()
    }
}
