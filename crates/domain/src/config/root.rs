use serde::{Deserialize, Serialize};

use super::aggregation::AggregationConfig;
use super::cluster::ClusterConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "dns-edges.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-edges/config.toml";

/// Main configuration structure for DNS Edges
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Inventory scope of an aggregation run
    #[serde(default)]
    pub aggregation: AggregationConfig,

    /// Cluster access and DNS log location
    #[serde(default)]
    pub cluster: ClusterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-edges.toml in current directory
    /// 3. /etc/dns-edges/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(namespaces) = overrides.namespaces {
            self.aggregation.namespaces = namespaces;
        }
        if overrides.include_kube_namespaces {
            self.aggregation.include_kube_namespaces = true;
        }
        if let Some(context) = overrides.context {
            self.cluster.context = Some(context);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ns) = self
            .aggregation
            .namespaces
            .iter()
            .find(|ns| ns.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "Invalid namespace name '{}'",
                ns
            )));
        }

        if self.cluster.dns_namespace.trim().is_empty() {
            return Err(ConfigError::Validation(
                "DNS namespace cannot be empty".to_string(),
            ));
        }

        if self.cluster.dns_label_selector.trim().is_empty() {
            return Err(ConfigError::Validation(
                "DNS label selector cannot be empty".to_string(),
            ));
        }

        if matches!(self.cluster.log_tail_lines, Some(n) if n <= 0) {
            return Err(ConfigError::Validation(
                "log_tail_lines must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub namespaces: Option<Vec<String>>,
    pub include_kube_namespaces: bool,
    pub context: Option<String>,
    pub log_level: Option<String>,
}
