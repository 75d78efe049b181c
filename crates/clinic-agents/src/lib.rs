//! Clinic Agents - agents that answer A2A messages
//!
//! This crate provides the agent trait, a registry that routes messages to
//! hosted agents, and the registrar agent that files intake notes.

pub mod agents;

// Re-export key types for convenience
pub use agents::{Agent, AgentConfig, AgentInfo, AgentRegistry, RegistrarAgent};
