//! Token identifiers and the top-level error type.

use std::str::FromStr;

use alloy::primitives::U256;
use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::config::ConfigError;
use crate::galaxy::decode::DecodeError;

/// Identifier of the token whose traits are read.
///
/// Keeps the text it was parsed from for logs and error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenId {
    raw: String,
    value: U256,
}

impl TokenId {
    /// Numeric value passed to the contract as `uint256`.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// Text as given on the command line.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for TokenId {
    type Err = GalaxyError;

    /// Accepts decimal or `0x`-prefixed hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GalaxyError::InvalidTokenId {
                input: s.to_string(),
                reason: "empty".to_string(),
            });
        }
        let value = U256::from_str(trimmed).map_err(|e| GalaxyError::InvalidTokenId {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            raw: trimmed.to_string(),
            value,
        })
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can go wrong between loading the config and printing.
#[derive(Debug, Error)]
pub enum GalaxyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("Missing contract address: set GALAXY_CONTRACT_ADDRESS or blockchain.contract_address")]
    MissingContractAddress,

    #[error("Invalid token id '{input}': {reason}")]
    InvalidTokenId { input: String, reason: String },

    #[error("getTraits returned {traits} entries but getTraitsAvailableValues returned {values}")]
    LengthMismatch { traits: usize, values: usize },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
