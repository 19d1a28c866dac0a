//! Layered configuration shared by the slotgate binaries.
//!
//! Values resolve from built-in defaults, then a TOML file (selected with
//! `--config-path` or `SLOTGATE_CONFIG_PATH`), then `SLOTGATE_*` environment
//! variables, then command-line flags. The two routing constants must be
//! identical on every proxy instance in a deployment; the logging settings are
//! local to the process.

mod defaults;
mod logging;

use serde::{Deserialize, Serialize};


pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_NAME_LENGTH, DEFAULT_SLOT_COUNT, default_log_filter,
    default_log_filter_string, default_log_format, default_max_name_length, default_slot_count,
};
pub use logging::{LogFormat, LogFormatParseError};
pub use ortho_config::{OrthoConfig, OrthoError};

/// Resolved configuration for the routing core and its tooling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "SLOTGATE")]
pub struct Config {
    /// Total number of hash slots the keyspace is partitioned into.
    #[serde(default = "default_slot_count")]
    #[ortho_config(default = DEFAULT_SLOT_COUNT)]
    pub slot_count: u32,
    /// Maximum accepted command-name length in bytes.
    #[serde(default = "default_max_name_length")]
    #[ortho_config(default = DEFAULT_MAX_NAME_LENGTH)]
    pub max_name_length: usize,
    /// `tracing` filter expression.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log records.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns the configured slot count.
    #[must_use]
    pub fn slot_count(&self) -> u32 {
        self.slot_count
    }

    /// Returns the configured maximum command-name length.
    #[must_use]
    pub fn max_name_length(&self) -> usize {
        self.max_name_length
    }

    /// Returns the configured log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the configured log format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}
