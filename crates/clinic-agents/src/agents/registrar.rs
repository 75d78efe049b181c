//! The doctor's office registrar
//!
//! Reads intake notes of the form `PATIENT: ..`, `ILLNESS: ..`,
//! `DESCRIPTION: ..` and files them with the `register_patient` tool. It does
//! not hold conversations: anything that is not an intake note gets the same
//! explanation of the expected format back.

use crate::agents::{Agent, AgentConfig};
use anyhow::Error;
use async_trait::async_trait;
use clinic_common::{ClinicError, IntakeNote, agent_ids};
use clinic_registry::RegistryStore;
use clinic_tools::{ClearPatientsTool, ListPatientsTool, RegisterPatientTool, Toolbox};
use serde_json::json;
use tracing::{debug, error, info};

const FORMAT_HELP: &str = "I could not find a PATIENT and an ILLNESS in that message, \
so nobody was registered. Please send:\n\
PATIENT: [NAME]\nILLNESS: [SYMPTOMS]\nDESCRIPTION: [DESCRIPTION]";

pub struct RegistrarAgent {
    config: AgentConfig,
    tools: Toolbox,
}

impl RegistrarAgent {
    pub fn new(store: RegistryStore) -> Self {
        let config = AgentConfig {
            agent_id: agent_ids::REGISTRAR.to_string(),
            name: "Doctor Office Assistant".to_string(),
            role: "registrar".to_string(),
            description: "Registers and manages patient records for the doctor's office"
                .to_string(),
        };
        let tools = Toolbox::new()
            .with_tool(Box::new(RegisterPatientTool::new(store.clone())))
            .with_tool(Box::new(ListPatientsTool::new(store.clone())))
            .with_tool(Box::new(ClearPatientsTool::new(store)));
        Self { config, tools }
    }
}

#[async_trait]
impl Agent for RegistrarAgent {
    fn agent_id(&self) -> &str {
        &self.config.agent_id
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn role(&self) -> &str {
        &self.config.role
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    async fn process_message(&mut self, text: &str) -> Result<String, Error> {
        let Some(note) = IntakeNote::parse(text) else {
            debug!("Registrar received a message without an intake note");
            return Ok(FORMAT_HELP.to_string());
        };

        info!("Registrar filing intake note for {}", note.patient);
        let params = json!({
            "name": note.patient,
            "illness": note.illness,
            "description": note.description,
        });
        match self.tools.execute_to_text("register_patient", params).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                error!("Could not register {}: {}", note.patient, e);
                let message = format!("could not register {}: {}", note.patient, e);
                Err(ClinicError::Agent(message).into())
            }
        }
    }

    fn get_available_tools(&self) -> Vec<String> {
        self.tools.names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_files_intake_note() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path().join("patients.json"));
        let mut agent = RegistrarAgent::new(store.clone());

        let reply = agent
            .process_message(
                "PATIENT: John Smith\nILLNESS: Headache and Fever\n\
                 DESCRIPTION: Persistent headache for 2 hours, high fever",
            )
            .await
            .unwrap();
        assert_eq!(
            reply,
            "Registered patient John Smith with illness: Headache and Fever"
        );

        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "Persistent headache for 2 hours, high fever");
    }

    #[tokio::test]
    async fn test_repeat_note_updates() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path().join("patients.json"));
        let mut agent = RegistrarAgent::new(store.clone());

        agent
            .process_message("PATIENT: Alex\nILLNESS: Headache and Fever")
            .await
            .unwrap();
        let reply = agent
            .process_message("PATIENT: alex\nILLNESS: Migraine")
            .await
            .unwrap();
        assert!(reply.starts_with("Updated patient alex"));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_conversation_is_not_registered() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path().join("patients.json"));
        let mut agent = RegistrarAgent::new(store.clone());

        let reply = agent
            .process_message("Hey, please book Alex in, he has a fever")
            .await
            .unwrap();
        assert!(reply.contains("PATIENT: [NAME]"));
        assert!(store.load().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_is_agent_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the registry file should be makes the save fail.
        let path = dir.path().join("patients.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();
        let mut agent = RegistrarAgent::new(RegistryStore::new(path));

        let err = agent
            .process_message("PATIENT: Alex\nILLNESS: Flu")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClinicError>(),
            Some(ClinicError::Agent(_))
        ));
        assert!(err.to_string().starts_with("Agent error: could not register Alex"));
    }

    #[test]
    fn test_identity_and_tools() {
        let dir = tempfile::tempdir().unwrap();
        let agent = RegistrarAgent::new(RegistryStore::new(dir.path().join("patients.json")));
        assert_eq!(agent.agent_id(), "doctor_office_agent");
        assert_eq!(
            agent.get_available_tools(),
            vec!["clear_patients", "list_patients", "register_patient"]
        );
    }
}
