//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (mumbai preset)
//!     → loader.rs (optional TOML file, then environment overrides)
//!     → validation.rs (semantic checks)
//!     → Config (immutable, passed into the entry point)
//! ```
//!
//! Only `loader::load_from_env` touches the process environment; everything
//! downstream takes a `Config`.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{BlockchainConfig, Config, EXPECTED_NETWORK};
