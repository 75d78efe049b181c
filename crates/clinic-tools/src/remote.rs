//! Tools that reach other agents over A2A

use crate::base::{AiTool, optional_str, required_str};
use anyhow::Error;
use async_trait::async_trait;
use clinic_a2a::RemoteAgentClient;
use clinic_common::IntakeNote;
use serde_json::{Value, json};
use tracing::debug;

/// Asks the medical advisor agent for a preliminary opinion
pub struct ConsultAdvisorTool {
    pub client: RemoteAgentClient,
    pub advisor_url: String,
}

impl ConsultAdvisorTool {
    pub fn new(client: RemoteAgentClient, advisor_url: impl Into<String>) -> Self {
        Self {
            client,
            advisor_url: advisor_url.into(),
        }
    }

    pub async fn consult(&self, symptoms: &str) -> String {
        self.client.call(&self.advisor_url, symptoms).await
    }
}

#[async_trait]
impl AiTool for ConsultAdvisorTool {
    fn name(&self) -> &str {
        "consult_advisor"
    }

    fn description(&self) -> &str {
        "Asks the medical advisor agent for a quick assessment of the described symptoms"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symptoms": {
                    "type": "string",
                    "description": "The user's symptoms in their own words"
                }
            },
            "required": ["symptoms"]
        })
    }

    fn validate_params(&self, params: &Value) -> Result<(), Error> {
        required_str(params, "symptoms")?;
        Ok(())
    }

    async fn execute(&self, params: Value) -> Result<Value, Error> {
        self.validate_params(&params)?;
        let reply = self.consult(required_str(&params, "symptoms")?).await;
        Ok(json!(reply))
    }
}

/// Sends a patient intake note to the registrar agent
pub struct NotifyRegistrarTool {
    pub client: RemoteAgentClient,
    pub registrar_url: String,
}

impl NotifyRegistrarTool {
    pub fn new(client: RemoteAgentClient, registrar_url: impl Into<String>) -> Self {
        Self {
            client,
            registrar_url: registrar_url.into(),
        }
    }

    pub async fn notify(
        &self,
        patient_name: &str,
        illness_summary: &str,
        description: &str,
    ) -> String {
        let note = IntakeNote::new(
            patient_name,
            illness_summary,
            Some(description.to_string()),
        );
        debug!("Notifying registrar about {}", patient_name);
        self.client
            .call(&self.registrar_url, &note.to_message_text())
            .await
    }
}

#[async_trait]
impl AiTool for NotifyRegistrarTool {
    fn name(&self) -> &str {
        "notify_registrar"
    }

    fn description(&self) -> &str {
        r#"Notifies the doctor's office registrar about a patient.
Parameters:
- `patient_name`: The patient's name
- `illness_summary`: 2-3 word summary of the symptoms
- `description`: Brief symptom description from the user (optional)
"#
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "patient_name": { "type": "string", "description": "The patient's name" },
                "illness_summary": {
                    "type": "string",
                    "description": "2-3 word summary of the symptoms"
                },
                "description": { "type": "string", "description": "Brief symptom description" }
            },
            "required": ["patient_name", "illness_summary"]
        })
    }

    fn validate_params(&self, params: &Value) -> Result<(), Error> {
        required_str(params, "patient_name")?;
        required_str(params, "illness_summary")?;
        optional_str(params, "description")?;
        Ok(())
    }

    async fn execute(&self, params: Value) -> Result<Value, Error> {
        self.validate_params(&params)?;
        let reply = self
            .notify(
                required_str(&params, "patient_name")?,
                required_str(&params, "illness_summary")?,
                optional_str(&params, "description")?.unwrap_or_default(),
            )
            .await;
        Ok(json!(reply))
    }
}
