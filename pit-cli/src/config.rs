//! Optional TOML configuration for the command-line front end.
//!
//! ```toml
//! [defaults]
//! dependents = 2
//! region = 1
//! insurance_mode = "custom"
//! custom_insurance = 5000000
//! yearly = false
//!
//! [logging]
//! level = "debug"
//! file = "vn-pit.log"
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use pit_core::InsuranceMode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub defaults: Defaults,
    pub logging: LoggingConfig,
}

/// Household settings used when the matching flag is not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub dependents: i32,
    pub region: u8,
    pub insurance_mode: InsuranceMode,
    pub custom_insurance: Option<Decimal>,
    /// Show amounts per year instead of per month.
    pub yearly: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            dependents: 0,
            region: 1,
            insurance_mode: InsuranceMode::Official,
            custom_insurance: None,
            yearly: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Any `EnvFilter` directive; `RUST_LOG` overrides it.
    pub level: String,
    /// Append plain-text logs to this file as well as stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl CliConfig {
    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Reads `path` when given, otherwise returns the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses TOML text; `origin` only names the source in errors.
    pub fn parse(
        content: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }
}
