//! Common types used across clinic components

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed-shape note the triage assistant sends to the registrar.
///
/// On the wire it is plain text, one `KEY: value` pair per line:
///
/// ```text
/// PATIENT: John Smith
/// ILLNESS: Headache and Fever
/// DESCRIPTION: Persistent headache for 2 hours, high fever
/// ```
///
/// The `DESCRIPTION` line is only present when there is something to say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeNote {
    pub patient: String,
    pub illness: String,
    pub description: Option<String>,
}

impl IntakeNote {
    pub fn new(
        patient: impl Into<String>,
        illness: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            patient: patient.into(),
            illness: illness.into(),
            description: description.filter(|d| !d.is_empty()),
        }
    }

    /// Render the note as the text carried in an A2A message part
    pub fn to_message_text(&self) -> String {
        let mut text = format!("PATIENT: {}\nILLNESS: {}", self.patient, self.illness);
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            text.push_str("\nDESCRIPTION: ");
            text.push_str(description);
        }
        text
    }

    /// Extract a note from free text. Keys are matched case-insensitively and
    /// lines that are not `KEY: value` pairs are skipped. Returns `None` unless
    /// both a patient and an illness are present.
    pub fn parse(text: &str) -> Option<Self> {
        let mut patient = None;
        let mut illness = None;
        let mut description = None;

        for line in text.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.trim().to_ascii_uppercase().as_str() {
                "PATIENT" => patient = Some(value.to_string()),
                "ILLNESS" => illness = Some(value.to_string()),
                "DESCRIPTION" => description = Some(value.to_string()),
                _ => {}
            }
        }

        Some(Self {
            patient: patient?,
            illness: illness?,
            description,
        })
    }
}

impl fmt::Display for IntakeNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_message_text())
    }
}
