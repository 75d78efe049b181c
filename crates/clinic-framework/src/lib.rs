//! Clinic Framework - Unified framework re-exporting all clinic components
//!
//! This meta-crate provides a unified API surface by re-exporting
//! all functionality from the individual clinic crates.

// Re-export all functionality from the clinic crates
pub use clinic_a2a as a2a;
pub use clinic_agents as agents;
pub use clinic_common as common;
pub use clinic_registry as registry;
pub use clinic_tools as tools;

// Re-export top-level types for convenience
pub use clinic_a2a::RemoteAgentClient;
pub use clinic_common::{ClinicConfig, ClinicError, IntakeNote, Result};
pub use clinic_registry::{PatientRecord, RegistryStore};

/// Convenience prelude module for common imports
pub mod prelude {
    // Common types, errors and configuration
    pub use clinic_common::{
        AgentEndpoints, BaseConfig, ClinicConfig, ClinicError, IntakeNote, Result, ServerConfig,
    };

    // Registry
    pub use clinic_registry::{PatientRecord, RegistryStore};

    // Messaging
    pub use clinic_a2a::{A2aMessage, A2aRequest, A2aResponse, RemoteAgentClient, Task};

    // Tools
    pub use clinic_tools::{
        AiTool, ClearPatientsTool, ConsultAdvisorTool, ListPatientsTool, NotifyRegistrarTool,
        RegisterPatientTool, Toolbox,
    };

    // Agent system
    pub use clinic_agents::{Agent, AgentInfo, AgentRegistry, RegistrarAgent};
}
