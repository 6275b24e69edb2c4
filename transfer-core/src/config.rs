//! Configuration for the transfer service

use compliance_engine::ComplianceConfig;
use fx_converter::RateTable;
use serde::{Deserialize, Serialize};

/// Transfer service configuration.
///
/// Rates and the restricted-currency set are data: they can be swapped
/// without touching rule order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directional FX rate table
    #[serde(default)]
    pub rates: RateTable,

    /// Rule thresholds and restricted-currency data
    #[serde(default)]
    pub compliance: ComplianceConfig,
}

impl Config {
    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }
}
