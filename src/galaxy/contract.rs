//! On-chain `TraitReader` backed by `eth_call`.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, B256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::blockchain::{BlockchainClient, BlockchainError, Wallet};
use crate::config::loader::{PRIVATE_KEY_ENV_VAR, PUBLIC_KEY_ENV_VAR};
use crate::config::Config;
use crate::galaxy::reader::TraitReader;
use crate::galaxy::types::{GalaxyError, TokenId};

sol! {
    /// Read surface of the deployed GalaxyData contract.
    interface IGalaxyData {
        function getTraits(uint256 tokenId) external view returns (bytes32[] memory);
        function getTraitsAvailableValues(uint256 tokenId) external view returns (bytes32[][] memory);
    }
}

/// Contract-access object for a deployed GalaxyData contract.
#[derive(Debug, Clone)]
pub struct GalaxyData {
    client: BlockchainClient,
    wallet: Wallet,
    contract: Address,
}

impl GalaxyData {
    /// Build the contract-access object from config.
    ///
    /// Requires both credentials and a contract address; connects to the
    /// configured node.
    pub async fn connect(config: Config) -> Result<Self, GalaxyError> {
        let private_key = config
            .private_key
            .as_deref()
            .ok_or(GalaxyError::MissingCredential(PRIVATE_KEY_ENV_VAR))?;
        let public_key = config
            .public_key
            .as_deref()
            .ok_or(GalaxyError::MissingCredential(PUBLIC_KEY_ENV_VAR))?;
        let wallet = Wallet::from_credentials(private_key, public_key)?;

        let contract: Address = config
            .blockchain
            .contract_address
            .as_deref()
            .ok_or(GalaxyError::MissingContractAddress)?
            .parse::<Address>()
            .map_err(|e| BlockchainError::Rpc(format!("Invalid contract address: {}", e)))?;

        let client = BlockchainClient::new(config.blockchain).await?;
        let data = Self::new(client, wallet, contract);
        tracing::debug!(contract = %data.contract_address(), "GalaxyData contract ready");

        Ok(data)
    }

    pub fn new(client: BlockchainClient, wallet: Wallet, contract: Address) -> Self {
        Self {
            client,
            wallet,
            contract,
        }
    }

    pub fn contract_address(&self) -> Address {
        self.contract
    }

    fn request(&self, input: Vec<u8>) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(self.contract)
            .with_input(input)
    }
}

fn encode_all(words: &[B256]) -> Vec<String> {
    words.iter().map(alloy::hex::encode_prefixed).collect()
}

impl TraitReader for GalaxyData {
    async fn get_traits(&self, token_id: &TokenId) -> Result<Vec<String>, GalaxyError> {
        let call = IGalaxyData::getTraitsCall {
            tokenId: token_id.value(),
        };
        let data = self.client.call(self.request(call.abi_encode())).await?;

        let traits = IGalaxyData::getTraitsCall::abi_decode_returns(&data).map_err(|e| {
            BlockchainError::Abi {
                method: "getTraits",
                reason: e.to_string(),
            }
        })?;

        tracing::debug!(token_id = %token_id, count = traits.len(), "getTraits returned");
        Ok(encode_all(&traits))
    }

    async fn get_traits_available_values(
        &self,
        token_id: &TokenId,
    ) -> Result<Vec<Vec<String>>, GalaxyError> {
        let call = IGalaxyData::getTraitsAvailableValuesCall {
            tokenId: token_id.value(),
        };
        let data = self.client.call(self.request(call.abi_encode())).await?;

        let values = IGalaxyData::getTraitsAvailableValuesCall::abi_decode_returns(&data)
            .map_err(|e| BlockchainError::Abi {
                method: "getTraitsAvailableValues",
                reason: e.to_string(),
            })?;

        tracing::debug!(
            token_id = %token_id,
            count = values.len(),
            "getTraitsAvailableValues returned"
        );
        Ok(values.iter().map(|list| encode_all(list)).collect())
    }
}
