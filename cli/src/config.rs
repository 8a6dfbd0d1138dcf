//! Generator configuration with TOML file support.
//!
//! The premine amount and precision are not configurable here; they always
//! come from [`AllocationPolicy::default`](premine_types::AllocationPolicy::default).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use premine_types::AmountWidth;
use premine_utils::LogFormat;

/// How the descriptor is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report with operator guidance.
    #[default]
    Text,
    /// Pretty-printed JSON descriptor.
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for a `premine-gen` run.
///
/// Can be loaded from a TOML file via [`GeneratorConfig::from_toml_file`];
/// command-line flags and environment variables override file values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Output format: "text" or "json".
    #[serde(default)]
    pub format: OutputFormat,

    /// Required address prefix; enables the prefix validator when set.
    #[serde(default)]
    pub address_prefix: Option<String>,

    /// Required address length in characters, checked by the prefix validator.
    #[serde(default)]
    pub address_length: Option<usize>,

    /// Width of the on-chain amount field.
    #[serde(default)]
    pub amount_width: AmountWidth,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            address_prefix: None,
            address_length: None,
            amount_width: AmountWidth::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Whether any destination shape rule is configured.
    pub fn validates_addresses(&self) -> bool {
        self.address_prefix.is_some() || self.address_length.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.amount_width, AmountWidth::U128);
        assert_eq!(config.log_level, "warn");
        assert!(!config.validates_addresses());
    }

    #[test]
    fn full_file() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            format = "json"
            address_prefix = "ox"
            address_length = 97
            amount_width = "u64"
            log_level = "debug"
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.address_prefix.as_deref(), Some("ox"));
        assert_eq!(config.address_length, Some(97));
        assert_eq!(config.amount_width, AmountWidth::U64);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.validates_addresses());
    }

    #[test]
    fn bad_values_rejected() {
        assert!(matches!(
            GeneratorConfig::from_toml_str(r#"format = "yaml""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(GeneratorConfig::from_toml_str(r#"amount_width = "u32""#).is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let config = GeneratorConfig {
            address_prefix: Some("ox".into()),
            amount_width: AmountWidth::U64,
            ..GeneratorConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(GeneratorConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "address_prefix = \"ox\"").unwrap();
        let config = GeneratorConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.address_prefix.as_deref(), Some("ox"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::from_toml_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
