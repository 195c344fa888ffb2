//! Configuration schema definitions.
//!
//! Types are deserialize-only. `Config` holds the private key, so it has no
//! `Serialize` impl and a redacting `Debug`.

use serde::Deserialize;

/// The only network the tool is allowed to read from.
pub const EXPECTED_NETWORK: &str = "mumbai";

/// Polygon Mumbai testnet chain id.
pub const MUMBAI_CHAIN_ID: u64 = 80001;

/// Public Mumbai endpoint used when nothing else is configured.
pub const MUMBAI_RPC_URL: &str = "https://rpc-mumbai.maticvigil.com";

/// Root configuration passed into the entry point.
#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Network name (`NETWORK`). Must equal [`EXPECTED_NETWORK`].
    pub network: Option<String>,

    /// Hex private key (`PRIVATE_KEY`).
    pub private_key: Option<String>,

    /// Account address paired with the private key (`PUBLIC_KEY`).
    pub public_key: Option<String>,

    /// Node and contract settings.
    pub blockchain: BlockchainConfig,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("network", &self.network)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("public_key", &self.public_key)
            .field("blockchain", &self.blockchain)
            .finish()
    }
}

/// Blockchain node and contract configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    #[serde(default)]
    pub failover_urls: Vec<String>,

    /// Chain ID expected from the node.
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Deployed GalaxyData contract address.
    pub contract_address: Option<String>,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            rpc_url: MUMBAI_RPC_URL.to_string(),
            failover_urls: Vec::new(),
            chain_id: MUMBAI_CHAIN_ID,
            rpc_timeout_secs: 30,
            contract_address: None,
        }
    }
}
