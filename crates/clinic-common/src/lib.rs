//! Clinic Common - Shared utilities and types
//!
//! This crate provides the common error type, configuration structs,
//! constants and the intake note format shared by all clinic agents.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use config::{AgentEndpoints, BaseConfig, ClinicConfig, ServerConfig};
pub use constants::*;
pub use error::{ClinicError, Result};
pub use types::IntakeNote;
