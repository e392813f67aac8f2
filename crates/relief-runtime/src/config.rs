//! # Runtime Configuration
//!
//! Genesis parameters for the ledger, loaded from YAML:
//!
//! ```yaml
//! admin_initial_balance: 1000
//! total_supply: 10000
//! nullifier_policy: burn_on_failure   # or: atomic
//! ```
//!
//! Every field is optional; omitted fields take the defaults shown above.

use std::path::{Path, PathBuf};

use relief_core::Amount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What happens to nullifier marks made by a transaction that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullifierPolicy {
    /// Marks made before the failure are committed. A claim whose payout
    /// fails is spent anyway.
    #[default]
    BurnOnFailure,
    /// A failed transaction commits nothing, nullifier marks included.
    Atomic,
}

impl std::fmt::Display for NullifierPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BurnOnFailure => f.write_str("burn_on_failure"),
            Self::Atomic => f.write_str("atomic"),
        }
    }
}

/// Errors loading or validating a [`RuntimeConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("admin_initial_balance ({initial}) exceeds total_supply ({supply})")]
    InitialBalanceExceedsSupply { initial: Amount, supply: Amount },
}

/// Genesis parameters of a relief ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Credited to the first administrator when the slot is claimed.
    pub admin_initial_balance: Amount,
    /// Upper bound on everything the ledger will ever issue.
    pub total_supply: Amount,
    pub nullifier_policy: NullifierPolicy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            admin_initial_balance: Amount::new(1000),
            total_supply: Amount::new(10_000),
            nullifier_policy: NullifierPolicy::default(),
        }
    }
}

impl RuntimeConfig {
    /// Parse and validate a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Reject parameter combinations the ledger cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin_initial_balance > self.total_supply {
            return Err(ConfigError::InitialBalanceExceedsSupply {
                initial: self.admin_initial_balance,
                supply: self.total_supply,
            });
        }
        Ok(())
    }
}
