//! Configuration validation.
//!
//! # Responsibilities
//! - Network guard (strict equality with the expected network)
//! - Semantic validation of file-provided values (serde handles syntactic)
//!
//! Returns all validation errors, not just the first.

use alloy::primitives::Address;

use crate::config::schema::{Config, EXPECTED_NETWORK};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Whether the configured network is the one this tool may read from.
///
/// Unset counts as a mismatch. No aliases, no case folding.
pub fn is_expected_network(config: &Config) -> bool {
    config.network.as_deref() == Some(EXPECTED_NETWORK)
}

/// Check value ranges and formats.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let chain = &config.blockchain;

    if url::Url::parse(&chain.rpc_url).is_err() {
        errors.push(ValidationError {
            field: "blockchain.rpc_url",
            message: format!("'{}' is not a valid URL", chain.rpc_url),
        });
    }

    for failover in &chain.failover_urls {
        if url::Url::parse(failover).is_err() {
            errors.push(ValidationError {
                field: "blockchain.failover_urls",
                message: format!("'{}' is not a valid URL", failover),
            });
        }
    }

    if chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "blockchain.rpc_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if let Some(address) = &chain.contract_address {
        if address.parse::<Address>().is_err() {
            errors.push(ValidationError {
                field: "blockchain.contract_address",
                message: format!("'{}' is not a valid address", address),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
