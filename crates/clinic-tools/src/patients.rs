//! Patient registry tools used by the registrar agent

use crate::base::{AiTool, optional_str, required_str};
use anyhow::Error;
use async_trait::async_trait;
use clinic_registry::RegistryStore;
use serde_json::{Value, json};

/// Registers a patient, replacing any record with the same name
pub struct RegisterPatientTool {
    pub store: RegistryStore,
}

impl RegisterPatientTool {
    pub fn new(store: RegistryStore) -> Self {
        Self { store }
    }

    pub fn register(&self, name: &str, illness: &str, description: &str) -> Result<String, Error> {
        Ok(self.store.upsert(name, illness, description)?)
    }
}

#[async_trait]
impl AiTool for RegisterPatientTool {
    fn name(&self) -> &str {
        "register_patient"
    }

    fn description(&self) -> &str {
        r#"Registers a patient with their name, illness, and description.
If a patient with the same name (ignoring case) exists, their record is replaced.
Parameters:
- `name`: Patient's name
- `illness`: Brief illness/symptom summary
- `description`: Detailed description of symptoms (optional)
"#
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Patient's name" },
                "illness": { "type": "string", "description": "Brief illness/symptom summary" },
                "description": {
                    "type": "string",
                    "description": "Detailed description of symptoms"
                }
            },
            "required": ["name", "illness"]
        })
    }

    fn validate_params(&self, params: &Value) -> Result<(), Error> {
        required_str(params, "name")?;
        required_str(params, "illness")?;
        optional_str(params, "description")?;
        Ok(())
    }

    async fn execute(&self, params: Value) -> Result<Value, Error> {
        self.validate_params(&params)?;
        let message = self.register(
            required_str(&params, "name")?,
            required_str(&params, "illness")?,
            optional_str(&params, "description")?.unwrap_or_default(),
        )?;
        Ok(json!(message))
    }
}

/// Lists every registered patient as numbered lines
pub struct ListPatientsTool {
    pub store: RegistryStore,
}

impl ListPatientsTool {
    pub fn new(store: RegistryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AiTool for ListPatientsTool {
    fn name(&self) -> &str {
        "list_patients"
    }

    fn description(&self) -> &str {
        "Gets the list of all registered patients"
    }

    fn schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, params: Value) -> Result<Value, Error> {
        self.validate_params(&params)?;
        Ok(json!(self.store.list_as_text()?))
    }
}

/// Empties the registry
pub struct ClearPatientsTool {
    pub store: RegistryStore,
}

impl ClearPatientsTool {
    pub fn new(store: RegistryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AiTool for ClearPatientsTool {
    fn name(&self) -> &str {
        "clear_patients"
    }

    fn description(&self) -> &str {
        "Clears all patient records from the registry"
    }

    fn schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, params: Value) -> Result<Value, Error> {
        self.validate_params(&params)?;
        Ok(json!(self.store.clear()?))
    }
}
