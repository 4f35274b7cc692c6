//! Generator configuration
//!
//! Loaded from an optional JSON file, then overridden by environment
//! variables, then by command line flags.
//!
//! # Environment variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | SHEETGEN_DB | sheetgen.db | Catalog database path |
//! | SHEETGEN_ADDR | 127.0.0.1:9000 | Admin routes listen address |
//! | SHEETGEN_LOG | info | Log level |
//!
//! # Example file
//!
//! ```json
//! {
//!   "generate": { "num_products": 24, "variants_per_product": 50, "currencies": ["eur"] },
//!   "database": "data/catalog.db",
//!   "categories": [{ "id": "pcat_sheets", "name": "Sheets" }]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, GenerateOptions, SalesChannel, ShippingProfile};
use crate::error::{Result, SheetgenError};
use crate::logging::LogFormat;

/// Everything the `sheetgen` binary needs to run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub generate: GenerateOptions,
    /// Catalog database file
    pub database: PathBuf,
    /// Admin routes listen address
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Categories the platform offers; see category resolution in the synthesizer
    pub categories: Vec<Category>,
    pub shipping_profile: ShippingProfile,
    /// The first channel is attached to every product
    pub sales_channels: Vec<SalesChannel>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate: GenerateOptions::default(),
            database: PathBuf::from("sheetgen.db"),
            listen_addr: "127.0.0.1:9000".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            categories: vec![
                Category { id: "pcat_sheets".to_string(), name: "Sheets".to_string() },
                Category { id: "pcat_bedding".to_string(), name: "Bedding".to_string() },
            ],
            shipping_profile: ShippingProfile {
                id: "sp_default".to_string(),
                name: "Default Shipping Profile".to_string(),
            },
            sales_channels: vec![SalesChannel {
                id: "sc_default".to_string(),
                name: "Default Sales Channel".to_string(),
            }],
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from `path` (defaults when `None`) and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SheetgenError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            SheetgenError::ConfigError(format!("invalid config {}: {}", path.display(), e))
        })
    }

    /// Override values from environment variables resolved by `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(db) = lookup("SHEETGEN_DB") {
            self.database = PathBuf::from(db);
        }
        if let Some(addr) = lookup("SHEETGEN_ADDR") {
            self.listen_addr = addr;
        }
        if let Some(level) = lookup("SHEETGEN_LOG") {
            self.log_level = level;
        }
    }

    /// Reject configurations the generator cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.sales_channels.is_empty() {
            return Err(SheetgenError::ConfigError(
                "at least one sales channel is required".to_string(),
            ));
        }
        if self.generate.currencies.is_empty() {
            return Err(SheetgenError::ConfigError(
                "at least one currency is required".to_string(),
            ));
        }
        Ok(())
    }
}
