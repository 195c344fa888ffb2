//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint (primary + failovers)
//! - Verify the node serves the configured chain
//! - Execute read-only `eth_call` requests under a timeout

use alloy::primitives::Bytes;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainConfig, BlockchainError, BlockchainResult, ChainId};

/// Outcome of the last provider attempt, kept to report why all of them failed.
enum Attempt {
    Error(String),
    TimedOut,
}

/// Blockchain RPC client wrapper with failover support.
#[derive(Clone)]
pub struct BlockchainClient {
    /// List of providers (primary + failovers).
    providers: Vec<Arc<dyn Provider + Send + Sync>>,
    /// Configuration.
    config: BlockchainConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// Fails only if the primary RPC URL is malformed. An unreachable node
    /// or a chain-id mismatch is logged and surfaces on the first real call.
    pub async fn new(config: BlockchainConfig) -> BlockchainResult<Self> {
        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);
        let mut providers = Vec::new();

        let primary_url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        providers.push(connect(primary_url));

        for url_str in &config.failover_urls {
            if let Ok(url) = url_str.parse() {
                providers.push(connect(url));
            } else {
                tracing::warn!(url = %url_str, "Ignoring invalid failover RPC URL");
            }
        }

        let client = Self {
            providers,
            config: config.clone(),
            timeout_duration,
        };

        match client.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    rpc_url = %config.rpc_url,
                    chain_id = config.chain_id,
                    "Blockchain client initialized"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Blockchain client initialized but chain verification failed"
                );
            }
        }

        Ok(client)
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.config.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        let mut last = None;
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_chain_id();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(ChainId::from(result)),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "RPC error, trying next provider");
                    last = Some(Attempt::Error(e.to_string()));
                }
                Err(_) => {
                    tracing::warn!(provider_idx = i, "RPC timeout, trying next provider");
                    last = Some(Attempt::TimedOut);
                }
            }
        }
        Err(self.exhausted(last))
    }

    /// Execute a read-only call and return the raw return data.
    ///
    /// A revert comes back from the node as an RPC error and is reported
    /// the same way as a transport failure.
    pub async fn call(&self, tx: TransactionRequest) -> BlockchainResult<Bytes> {
        let mut last = None;
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.call(tx.clone());
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "eth_call failed");
                    last = Some(Attempt::Error(e.to_string()));
                }
                Err(_) => {
                    tracing::warn!(provider_idx = i, "eth_call timeout");
                    last = Some(Attempt::TimedOut);
                }
            }
        }
        Err(self.exhausted(last))
    }

    fn exhausted(&self, last: Option<Attempt>) -> BlockchainError {
        match last {
            Some(Attempt::TimedOut) if self.providers.len() == 1 => {
                BlockchainError::Timeout(self.config.rpc_timeout_secs)
            }
            Some(Attempt::Error(e)) => {
                BlockchainError::Rpc(format!("All RPC providers failed, last error: {}", e))
            }
            _ => BlockchainError::Rpc("All RPC providers failed".to_string()),
        }
    }
}

fn connect(url: url::Url) -> Arc<dyn Provider + Send + Sync> {
    // Read-only usage: no nonce/gas fillers.
    Arc::new(
        ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(url),
    ) as Arc<dyn Provider + Send + Sync>
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
