//! Network selection and the endpoints each network resolves to.

use std::fmt;

use serde::Deserialize;

/// Chain id of the Sepolia test network.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Chain id of Ethereum mainnet.
pub const MAINNET_CHAIN_ID: u64 = 1;

const SEPOLIA_RPC: &str = "https://ethereum-sepolia-rpc.publicnode.com";
const MAINNET_RPC: &str = "https://ethereum-rpc.publicnode.com";
const SEPOLIA_EXPLORER: &str = "https://sepolia.etherscan.io";
const MAINNET_EXPLORER: &str = "https://etherscan.io";

/// Target network (testnet vs mainnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Testnet,
    Mainnet,
}

impl Network {
    #[must_use]
    pub const fn from_testnet_flag(testnet: bool) -> Self {
        if testnet {
            Self::Testnet
        } else {
            Self::Mainnet
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Testnet => write!(f, "testnet"),
            Self::Mainnet => write!(f, "mainnet"),
        }
    }
}

/// Everything a command needs to know about the selected network.
///
/// Selected once at command entry and passed down, so flows never branch on
/// the network flag themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    pub network: Network,
    pub chain_id: u64,
    /// JSON-RPC endpoint for balance, submission and receipt calls.
    pub rpc_url: String,
    /// Base URL of the verification API (`{base}/api`).
    pub api_base_url: String,
    /// Base URL for human-facing transaction and address links.
    pub explorer_base_url: String,
}

impl NetworkProfile {
    /// Built-in endpoints for a network.
    #[must_use]
    pub fn builtin(network: Network) -> Self {
        match network {
            Network::Testnet => Self {
                network,
                chain_id: SEPOLIA_CHAIN_ID,
                rpc_url: SEPOLIA_RPC.to_string(),
                api_base_url: SEPOLIA_EXPLORER.to_string(),
                explorer_base_url: SEPOLIA_EXPLORER.to_string(),
            },
            Network::Mainnet => Self {
                network,
                chain_id: MAINNET_CHAIN_ID,
                rpc_url: MAINNET_RPC.to_string(),
                api_base_url: MAINNET_EXPLORER.to_string(),
                explorer_base_url: MAINNET_EXPLORER.to_string(),
            },
        }
    }

    /// Explorer link for a transaction hash.
    #[must_use]
    pub fn tx_url(&self, tx_hash: impl fmt::Display) -> String {
        format!("{}/tx/{tx_hash}", self.explorer_base_url.trim_end_matches('/'))
    }

    /// Explorer link for an address.
    #[must_use]
    pub fn address_url(&self, address: impl fmt::Display) -> String {
        format!(
            "{}/address/{address}",
            self.explorer_base_url.trim_end_matches('/')
        )
    }
}

/// Testnet and mainnet profiles after configuration overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfiles {
    testnet: NetworkProfile,
    mainnet: NetworkProfile,
}

impl NetworkProfiles {
    #[must_use]
    pub fn new(testnet: NetworkProfile, mainnet: NetworkProfile) -> Self {
        Self { testnet, mainnet }
    }

    #[must_use]
    pub fn get(&self, network: Network) -> &NetworkProfile {
        match network {
            Network::Testnet => &self.testnet,
            Network::Mainnet => &self.mainnet,
        }
    }
}

impl Default for NetworkProfiles {
    fn default() -> Self {
        Self::new(
            NetworkProfile::builtin(Network::Testnet),
            NetworkProfile::builtin(Network::Mainnet),
        )
    }
}
