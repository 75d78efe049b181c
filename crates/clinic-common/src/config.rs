//! Configuration types and utilities for the clinic agents

use crate::constants::{DEFAULT_CLIENT_ID, endpoints, timeouts};
use crate::error::{ClinicError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Base configuration that all components can use
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Where the remote agents live and how to reach them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentEndpoints {
    /// A2A endpoint of the medical advisor agent
    pub advisor_url: String,
    /// A2A endpoint of the clinic registrar agent
    pub registrar_url: String,
    /// Value placed in the `id` field of outbound envelopes
    pub client_id: String,
    /// Per-call timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for AgentEndpoints {
    fn default() -> Self {
        Self {
            advisor_url: endpoints::DEFAULT_ADVISOR_URL.to_string(),
            registrar_url: endpoints::DEFAULT_REGISTRAR_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout_seconds: timeouts::DEFAULT_AGENT_CALL_TIMEOUT,
        }
    }
}

impl AgentEndpoints {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Settings for the agent host and dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`, also home of `index.html`
    pub dashboard_dir: PathBuf,
    /// Registry file name, resolved against `dashboard_dir` when relative
    pub registry_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: endpoints::DEFAULT_REGISTRAR_PORT,
            dashboard_dir: PathBuf::from("./dashboard"),
            registry_file: PathBuf::from("patients.json"),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    pub base: BaseConfig,
    pub agents: AgentEndpoints,
    pub server: ServerConfig,
}

impl ClinicConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if config_path.exists() {
            debug!("Loading configuration from {:?}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            Self::from_toml_str(&config_str)
        } else {
            debug!("No configuration at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Apply `CLINIC_*` environment variables on top of the loaded values.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment in production).
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CLINIC_ADVISOR_URL") {
            self.agents.advisor_url = url;
        }
        if let Some(url) = lookup("CLINIC_REGISTRAR_URL") {
            self.agents.registrar_url = url;
        }
        if let Some(file) = lookup("CLINIC_REGISTRY_FILE") {
            self.server.registry_file = PathBuf::from(file);
        }
        if let Some(level) = lookup("CLINIC_LOG_LEVEL") {
            self.base.log_level = level;
        }
        if let Some(timeout) = lookup("CLINIC_TIMEOUT_SECONDS") {
            self.agents.timeout_seconds = timeout.parse().map_err(|_| {
                ClinicError::Config(format!("CLINIC_TIMEOUT_SECONDS is not a number: {}", timeout))
            })?;
        }
        Ok(())
    }

    /// Full path of the patient registry file
    pub fn registry_path(&self) -> PathBuf {
        if self.server.registry_file.is_absolute() {
            self.server.registry_file.clone()
        } else {
            self.server.dashboard_dir.join(&self.server.registry_file)
        }
    }
}
