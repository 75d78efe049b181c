//! The tool trait shared by every agent

use anyhow::{Error, anyhow};
use async_trait::async_trait;
use serde_json::Value;

/// A tool that can be used by an agent's reasoning loop
#[async_trait]
pub trait AiTool: Send + Sync {
    /// The name of the tool
    fn name(&self) -> &str;

    /// A description of what the tool does
    fn description(&self) -> &str;

    /// The JSON schema for the tool's parameters
    fn schema(&self) -> Value;

    /// Execute the tool with the given parameters
    async fn execute(&self, params: Value) -> Result<Value, Error>;

    /// Validate the parameters against the schema
    fn validate_params(&self, params: &Value) -> Result<(), Error> {
        if !params.is_object() && !params.is_null() {
            return Err(anyhow!("Parameters must be an object"));
        }
        Ok(())
    }
}

/// Fetch a required string parameter
pub(crate) fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, Error> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("Missing or invalid '{}' parameter", key))
}

/// Fetch an optional string parameter, treating `null` as absent
pub(crate) fn optional_str<'a>(params: &'a Value, key: &str) -> Result<Option<&'a str>, Error> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(anyhow!("'{}' must be a string", key)),
    }
}
