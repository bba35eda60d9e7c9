//! Configuration Module
//!
//! This module defines all configuration structures for a multisend job.
//! Configuration is loaded from TOML files and parsed using serde.

use crate::{AssetId, ingest::IngestMode};
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// Contains all configuration sections for a job.
/// Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [node]
/// rpc_url = "http://127.0.0.1:8545"
/// chain_id = 1
///
/// [batch]
/// gas_asset_id = 0
///
/// [input]
/// path = "recipients.csv"
/// has_headers = false
///
/// [input.mode]
/// kind = "fixed_asset"
/// asset_id = 0
///
/// [account]
/// mnemonic = "..."
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub node: NodeConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub account: AccountConfig,
}

/// Ledger node connection configuration
///
/// # Fields
/// - `rpc_url`: Node RPC endpoint
/// - `chain_id`: Network the transactions are signed for
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    pub rpc_url: String,
    pub chain_id: u64,
}

/// Batch encoding configuration
///
/// # Fields
/// - `gas_asset_id`: Asset the transaction fees are paid in
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub gas_asset_id: AssetId,
}

/// Input file configuration
///
/// # Supported Modes
/// - `per_row_asset`: rows are `address,amount,asset_id`
/// - `fixed_asset`: rows are `address,amount`; needs `asset_id`
/// - `fixed_value`: rows are `address`; needs `asset_id` and `value`
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub path: String,
    #[serde(default)]
    pub has_headers: bool,
    pub mode: IngestMode,
}

/// Signing account configuration
///
/// With neither field set, a new account is generated for the job.
#[derive(Clone, Default, Deserialize)]
pub struct AccountConfig {
    pub mnemonic: Option<String>,
    pub private_key: Option<String>,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "<redacted>"))
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        // Read the file contents as a string
        let content = fs::read_to_string(path)?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [node]
            rpc_url = "http://127.0.0.1:8545"
            chain_id = 2

            [batch]
            gas_asset_id = 1

            [input]
            path = "recipients.csv"
            has_headers = true

            [input.mode]
            kind = "fixed_value"
            asset_id = 5
            value = 100

            [account]
            mnemonic = "test test test test test test test test test test test junk"
            "#,
        )
        .unwrap();

        assert_eq!(config.node.chain_id, 2);
        assert_eq!(config.batch.gas_asset_id, 1);
        assert!(config.input.has_headers);
        assert_eq!(
            config.input.mode,
            IngestMode::FixedValue {
                asset_id: 5,
                value: 100
            }
        );
        assert!(config.account.mnemonic.is_some());
        assert!(!format!("{:?}", config.account).contains("junk"));
    }

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let config = Config::parse(
            r#"
            [node]
            rpc_url = "http://127.0.0.1:8545"
            chain_id = 1

            [input]
            path = "recipients.csv"
            mode = { kind = "per_row_asset" }
            "#,
        )
        .unwrap();

        assert_eq!(config.batch.gas_asset_id, 0);
        assert!(!config.input.has_headers);
        assert_eq!(config.input.mode, IngestMode::PerRowAsset);
        assert!(config.account.mnemonic.is_none());
        assert!(config.account.private_key.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let result = Config::parse(
            r#"
            [node]
            rpc_url = "http://127.0.0.1:8545"
            chain_id = 1

            [input]
            path = "recipients.csv"
            mode = { kind = "airdrop" }
            "#,
        );

        assert!(result.is_err());
    }
}
