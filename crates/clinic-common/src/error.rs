//! Clinic Common Error Types
//!
//! Centralized error handling for all clinic components

use std::fmt;

/// Main error type for clinic operations
#[derive(Debug)]
pub enum ClinicError {
    /// Generic error with message
    Generic(String),
    /// IO-related errors
    Io(std::io::Error),
    /// Serialization/deserialization errors
    Serde(serde_json::Error),
    /// Configuration errors
    Config(String),
    /// Agent processing errors
    Agent(String),
    /// Tool execution errors
    Tool(String),
}

impl fmt::Display for ClinicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClinicError::Generic(msg) => write!(f, "Clinic error: {}", msg),
            ClinicError::Io(err) => write!(f, "IO error: {}", err),
            ClinicError::Serde(err) => write!(f, "Serialization error: {}", err),
            ClinicError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ClinicError::Agent(msg) => write!(f, "Agent error: {}", msg),
            ClinicError::Tool(msg) => write!(f, "Tool error: {}", msg),
        }
    }
}

impl std::error::Error for ClinicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClinicError::Io(err) => Some(err),
            ClinicError::Serde(err) => Some(err),
            _ => None,
        }
    }
}

/// Convenience result type for clinic operations
pub type Result<T> = std::result::Result<T, ClinicError>;

impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::Io(err)
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        ClinicError::Serde(err)
    }
}

impl From<toml::de::Error> for ClinicError {
    fn from(err: toml::de::Error) -> Self {
        ClinicError::Config(err.to_string())
    }
}

impl From<anyhow::Error> for ClinicError {
    fn from(err: anyhow::Error) -> Self {
        ClinicError::Generic(err.to_string())
    }
}
