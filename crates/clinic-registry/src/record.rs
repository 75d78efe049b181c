//! Patient record type

use chrono::Local;
use clinic_common::REGISTERED_STATUS;
use serde::{Deserialize, Serialize};

/// One registered patient. `name` is the case-insensitive key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub illness: String,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 local time of the last registration
    pub timestamp: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    REGISTERED_STATUS.to_string()
}

impl PatientRecord {
    /// Build a fresh record stamped with the current time
    pub fn new(
        name: impl Into<String>,
        illness: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            illness: illness.into(),
            description: description.into(),
            timestamp: Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            status: default_status(),
        }
    }

    /// Whether this record is keyed by `name`, ignoring case
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
