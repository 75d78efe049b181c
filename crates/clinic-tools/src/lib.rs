//! Clinic Tools - the tool surface of each agent
//!
//! Registry tools wrap the patient store; remote tools wrap the A2A client.
//! Every tool answers with a plain sentence, failures included, because the
//! caller is a language-model loop that reads text.

pub mod base;
pub mod patients;
pub mod remote;
pub mod toolbox;

// Re-export key tools for convenience
pub use base::AiTool;
pub use patients::{ClearPatientsTool, ListPatientsTool, RegisterPatientTool};
pub use remote::{ConsultAdvisorTool, NotifyRegistrarTool};
pub use toolbox::Toolbox;
