//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use crate::config::schema::Config;
use crate::config::validation::{is_expected_network, validate_config, ValidationError};

pub const NETWORK_ENV_VAR: &str = "NETWORK";
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";
pub const PUBLIC_KEY_ENV_VAR: &str = "PUBLIC_KEY";
pub const RPC_URL_ENV_VAR: &str = "GALAXY_RPC_URL";
pub const CONTRACT_ADDRESS_ENV_VAR: &str = "GALAXY_CONTRACT_ADDRESS";
pub const RPC_TIMEOUT_ENV_VAR: &str = "GALAXY_RPC_TIMEOUT_SECS";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { var: &'static str, message: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, message } => write!(f, "Invalid {}: {}", var, message),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read a TOML file into a config without validating it.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Overlay environment values on top of `config`.
///
/// `lookup` abstracts the environment so callers can pass a fixed map.
/// Empty values are treated as unset.
pub fn apply_env<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(network) = get(NETWORK_ENV_VAR) {
        config.network = Some(network);
    }
    if let Some(key) = get(PRIVATE_KEY_ENV_VAR) {
        config.private_key = Some(key);
    }
    if let Some(key) = get(PUBLIC_KEY_ENV_VAR) {
        config.public_key = Some(key);
    }
    if let Some(url) = get(RPC_URL_ENV_VAR) {
        config.blockchain.rpc_url = url;
    }
    if let Some(address) = get(CONTRACT_ADDRESS_ENV_VAR) {
        config.blockchain.contract_address = Some(address);
    }
    if let Some(raw) = get(RPC_TIMEOUT_ENV_VAR) {
        config.blockchain.rpc_timeout_secs = raw.parse().map_err(|e| ConfigError::Env {
            var: RPC_TIMEOUT_ENV_VAR,
            message: format!("'{}': {}", raw, e),
        })?;
    }

    Ok(config)
}

/// Build the effective configuration: defaults, then the optional file,
/// then environment overrides, then semantic validation.
///
/// The network is resolved first. When it is not the expected one the
/// remaining settings are never parsed or validated, so the network guard
/// still gets to run; the returned config carries only the network.
pub fn load<F>(path: Option<&Path>, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let file = path.map(load_config_file);

    let network = lookup(NETWORK_ENV_VAR)
        .filter(|v| !v.is_empty())
        .or_else(|| match &file {
            Some(Ok(config)) => config.network.clone(),
            _ => None,
        });
    let guard = Config {
        network,
        ..Config::default()
    };
    if !is_expected_network(&guard) {
        return Ok(guard);
    }

    let base = match file {
        Some(loaded) => loaded?,
        None => Config::default(),
    };

    let config = apply_env(base, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// [`load`] against the real process environment.
pub fn load_from_env(path: Option<&Path>) -> Result<Config, ConfigError> {
    load(path, |key| std::env::var(key).ok())
}
