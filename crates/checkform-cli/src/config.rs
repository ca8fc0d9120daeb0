//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Endpoint used when neither flags nor the config file name a source
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// CLI configuration file contents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Check Item Source endpoint
    pub endpoint: Option<String>,

    /// Local checks file, used instead of an endpoint
    pub checks_file: Option<PathBuf>,

    /// Where a file source writes submitted results
    pub results_file: Option<PathBuf>,

    /// Request timeout in seconds; unset waits indefinitely
    pub timeout_seconds: Option<u64>,
}

/// Where check items come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceSettings {
    Http {
        endpoint: String,
        timeout: Option<Duration>,
    },
    File {
        checks_file: PathBuf,
        results_file: Option<PathBuf>,
    },
}

/// Source selection given on the command line
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    pub endpoint: Option<String>,
    pub checks_file: Option<PathBuf>,
    pub results_file: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("checkform").join("config.toml"))
    }

    /// Pick the source: command-line flags first, then the file, then the
    /// default endpoint. A checks file wins over an endpoint at the same
    /// level.
    pub fn resolve_source(&self, overrides: SourceOverrides) -> SourceSettings {
        let results_file = overrides.results_file.or_else(|| self.results_file.clone());
        let timeout = self.timeout_seconds.map(Duration::from_secs);

        if let Some(checks_file) = overrides.checks_file {
            return SourceSettings::File {
                checks_file,
                results_file,
            };
        }
        if let Some(endpoint) = overrides.endpoint {
            return SourceSettings::Http { endpoint, timeout };
        }
        if let Some(checks_file) = self.checks_file.clone() {
            return SourceSettings::File {
                checks_file,
                results_file,
            };
        }

        SourceSettings::Http {
            endpoint: self
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout,
        }
    }
}
