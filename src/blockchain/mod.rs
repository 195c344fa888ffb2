//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Config (credentials, RPC URL, contract address)
//!     → wallet.rs (credential parsing)
//!     → client.rs (RPC connection with timeouts and failover)
//!     → galaxy::contract (eth_call against GalaxyData)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use types::{BlockchainConfig, BlockchainError, BlockchainResult, ChainId};
pub use wallet::Wallet;
