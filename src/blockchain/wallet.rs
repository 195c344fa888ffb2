//! Account credentials for contract access.
//!
//! # Security
//! - Keys come from the loaded `Config`, which reads them from the environment
//! - Keys are never logged or serialized

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Signing key plus the public account address it is paired with.
///
/// Reads only need the address (sent as `from` on `eth_call`), but the key is
/// still parsed so a broken credential pair is rejected up front.
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
    public_address: Address,
}

impl Wallet {
    /// Create a wallet from a hex private key and a public address.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `public_key` - Account address, `0x`-prefixed
    pub fn from_credentials(private_key_hex: &str, public_key: &str) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        let public_address: Address = public_key.trim().parse().map_err(|e| {
            BlockchainError::Wallet(format!("Invalid public key '{}': {}", public_key, e))
        })?;

        if signer.address() != public_address {
            tracing::warn!(
                signer = %signer.address(),
                public_key = %public_address,
                "Private key does not belong to the configured public key"
            );
        }

        tracing::debug!(address = %public_address, "Wallet initialized");

        Ok(Self {
            signer,
            public_address,
        })
    }

    /// Address calls are issued from.
    pub fn address(&self) -> Address {
        self.public_address
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.public_address)
            .finish_non_exhaustive()
    }
}
