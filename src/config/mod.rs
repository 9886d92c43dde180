use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SajuError};
use crate::utils::validation::{validate_range, validate_socket_addr, validate_url, Validate};
use clap::Parser;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "saju-api")]
#[command(about = "Four Pillars (saju) calculation API server")]
pub struct CliConfig {
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: String,

    #[arg(long, env = "ORACLE_ENDPOINT", default_value = "http://127.0.0.1:9390")]
    pub oracle_endpoint: String,

    #[arg(long, env = "ORACLE_TIMEOUT_SECS", default_value = "5")]
    pub oracle_timeout_secs: u64,

    #[arg(long, help = "TOML configuration file overriding the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Apply overrides from the optional TOML configuration file.
    pub fn apply_file_overrides(&mut self) -> Result<()> {
        let Some(path) = self.config.clone() else {
            return Ok(());
        };

        let file = TomlConfig::load(Path::new(&path))?;

        if let Some(server) = file.server {
            if let Some(bind) = server.bind {
                self.bind = bind;
            }
        }
        if let Some(oracle) = file.oracle {
            if let Some(endpoint) = oracle.endpoint {
                self.oracle_endpoint = endpoint;
            }
            if let Some(timeout) = oracle.timeout_seconds {
                self.oracle_timeout_secs = timeout;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn oracle_endpoint(&self) -> &str {
        &self.oracle_endpoint
    }

    fn oracle_timeout_secs(&self) -> u64 {
        self.oracle_timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind", &self.bind)?;
        validate_url("oracle_endpoint", &self.oracle_endpoint)?;
        validate_range("oracle_timeout_secs", self.oracle_timeout_secs, 1, 120)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub oracle: Option<OracleSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OracleSection {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| SajuError::ConfigError {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        toml::from_str(&raw).map_err(|e| SajuError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }
}
