//! Name-indexed tool collection

use crate::base::AiTool;
use anyhow::Error;
use clinic_common::ClinicError;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// The set of tools one agent can call, looked up by name
#[derive(Default)]
pub struct Toolbox {
    tools: BTreeMap<String, Box<dyn AiTool>>,
}

impl Toolbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool, replacing any tool registered under the same name
    pub fn with_tool(mut self, tool: Box<dyn AiTool>) -> Self {
        self.register(tool);
        self
    }

    pub fn register(&mut self, tool: Box<dyn AiTool>) {
        debug!("Registering tool: {}", tool.name());
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&dyn AiTool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Tool names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn AiTool> {
        self.tools.values().map(|t| t.as_ref())
    }

    pub async fn execute(&self, name: &str, params: Value) -> Result<Value, Error> {
        let tool = self
            .get(name)
            .ok_or_else(|| ClinicError::Tool(format!("Unknown tool: {}", name)))?;
        let result = tool.execute(params).await?;
        info!("Tool {} completed successfully", name);
        Ok(result)
    }

    /// Run a tool and render its result as the text a reasoning loop reads
    pub async fn execute_to_text(&self, name: &str, params: Value) -> Result<String, Error> {
        let result = self.execute(name, params).await?;
        Ok(match result {
            Value::String(text) => text,
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patients::{ClearPatientsTool, ListPatientsTool, RegisterPatientTool};
    use clinic_registry::RegistryStore;
    use serde_json::json;

    fn toolbox(store: &RegistryStore) -> Toolbox {
        Toolbox::new()
            .with_tool(Box::new(RegisterPatientTool::new(store.clone())))
            .with_tool(Box::new(ListPatientsTool::new(store.clone())))
            .with_tool(Box::new(ClearPatientsTool::new(store.clone())))
    }

    #[tokio::test]
    async fn test_dispatch_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path().join("patients.json"));
        let tools = toolbox(&store);

        assert_eq!(
            tools.names(),
            vec!["clear_patients", "list_patients", "register_patient"]
        );

        let text = tools
            .execute_to_text("register_patient", json!({"name": "Alex", "illness": "Cough"}))
            .await
            .unwrap();
        assert_eq!(text, "Registered patient Alex with illness: Cough");
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegistryStore::new(dir.path().join("patients.json"));
        let err = toolbox(&store)
            .execute("book_surgery", json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Tool error: Unknown tool: book_surgery");
        assert!(matches!(
            err.downcast_ref::<ClinicError>(),
            Some(ClinicError::Tool(_))
        ));
    }
}
