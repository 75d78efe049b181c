//! Agent registry for the agents hosted by one process

use crate::agents::{Agent, AgentInfo};
use anyhow::{Error, anyhow};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Type alias for agent storage
type AgentMap = Arc<RwLock<HashMap<String, Arc<RwLock<Box<dyn Agent>>>>>>;

/// Registry of hosted agents.
///
/// Each agent sits behind its own write lock, so one agent handles one
/// message at a time. That keeps the registrar the single writer of its
/// patient file even when several conversations reach it at once.
#[derive(Clone, Default)]
pub struct AgentRegistry {
    agents: AgentMap,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new agent
    pub async fn register_agent(&self, agent: Box<dyn Agent>) -> Result<(), Error> {
        let agent_id = agent.agent_id().to_string();
        debug!("Registering agent: {}", agent_id);

        let mut agents = self.agents.write().await;
        if agents.contains_key(&agent_id) {
            return Err(anyhow!("Agent with ID {} already exists", agent_id));
        }

        agents.insert(agent_id.clone(), Arc::new(RwLock::new(agent)));
        debug!("Successfully registered agent: {}", agent_id);
        Ok(())
    }

    /// Unregister an agent
    pub async fn unregister_agent(&self, agent_id: &str) -> Result<(), Error> {
        debug!("Unregistering agent: {}", agent_id);

        let mut agents = self.agents.write().await;
        agents
            .remove(agent_id)
            .ok_or_else(|| anyhow!("Agent {} not found", agent_id))?;
        Ok(())
    }

    /// Deliver `text` to an agent and wait for its reply
    pub async fn send_message_and_wait(&self, agent_id: &str, text: &str) -> Result<String, Error> {
        let agents = self.agents.read().await;
        let target_agent = agents
            .get(agent_id)
            .ok_or_else(|| anyhow!("Target agent {} not found", agent_id))?
            .clone();
        drop(agents);

        debug!("Routing message to {}", agent_id);
        let result = target_agent.write().await.process_message(text).await;
        if let Err(e) = &result {
            error!("Agent {} failed to process message: {}", agent_id, e);
        }
        result
    }

    /// List all registered agent ids, sorted
    pub async fn list_agents(&self) -> Vec<String> {
        let agents = self.agents.read().await;
        let mut ids: Vec<String> = agents.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Get agent information
    pub async fn get_agent_info(&self, agent_id: &str) -> Option<AgentInfo> {
        let agent = self.agents.read().await.get(agent_id)?.clone();
        let agent_guard = agent.read().await;
        Some(AgentInfo::of(&**agent_guard))
    }

    /// Check if an agent exists
    pub async fn has_agent(&self, agent_id: &str) -> bool {
        self.agents.read().await.contains_key(agent_id)
    }
}
