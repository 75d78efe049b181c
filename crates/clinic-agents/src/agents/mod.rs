//! Agent module for the clinic agents
//!
//! An agent receives the text of an inbound A2A message and answers with
//! text. How it decides what to answer is its own business; the host only
//! routes messages to it.

pub mod registrar;
pub mod registry;

pub use registrar::RegistrarAgent;
pub use registry::AgentRegistry;

use anyhow::Error;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Core trait for hosted agents
#[async_trait]
pub trait Agent: Send + Sync {
    /// Unique identifier, as used in the A2A endpoint path
    fn agent_id(&self) -> &str;

    /// Human-readable name for this agent
    fn name(&self) -> &str;

    /// Role or type of this agent (e.g., "registrar", "advisor")
    fn role(&self) -> &str;

    fn description(&self) -> &str;

    /// Process an incoming message and produce the reply text
    async fn process_message(&mut self, text: &str) -> Result<String, Error>;

    /// Names of the tools this agent can call
    fn get_available_tools(&self) -> Vec<String>;
}

/// Identity of an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub agent_id: String,
    pub name: String,
    pub role: String,
    pub description: String,
}

/// Public summary of a hosted agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub agent_id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub tools: Vec<String>,
}

impl AgentInfo {
    pub fn of(agent: &dyn Agent) -> Self {
        Self {
            agent_id: agent.agent_id().to_string(),
            name: agent.name().to_string(),
            role: agent.role().to_string(),
            description: agent.description().to_string(),
            tools: agent.get_available_tools(),
        }
    }
}
