//! Configuration Module
//!
//! This module defines all configuration structures for the ledger.
//! Configuration is loaded from TOML files and parsed using serde.

use crate::scheduler::OrderingPolicyType;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
///
/// Contains all configuration sections for the ledger.
/// Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [ledger]
/// genesis_path = "data/genesis.json"
/// epoch_files = ["data/epoch-1.json"]
///
/// [scheduling]
/// policy_type = "Arrival"
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Ledger input configuration
///
/// # Fields
/// - `genesis_path`: JSON file holding the initial unspent outputs
/// - `epoch_files`: JSON files, one per epoch, each holding a list of candidate transactions
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    pub genesis_path: PathBuf,
    #[serde(default)]
    pub epoch_files: Vec<PathBuf>,
}

/// Candidate ordering configuration
///
/// # Supported Policies
/// - `"Arrival"`: Candidates processed in submission order
/// - `"TransactionId"`: Candidates processed by ascending transaction hash
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchedulingConfig {
    #[serde(default)]
    pub policy_type: OrderingPolicyType,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
