//! Envelope types for agent messaging
//!
//! Requests are JSON-RPC 2.0 `message/send` calls carrying one message:
//!
//! ```json
//! {"id": "...", "jsonrpc": "2.0", "method": "message/send",
//!  "params": {"message": {"message_id": "...", "role": "user", "parts": [{"text": "..."}]}}}
//! ```
//!
//! Replies wrap a task whose `history` ends with the answering agent's message.
//! The reply text is read from `result.history[last].parts[0].text`.

use clinic_common::{JSONRPC_VERSION, MESSAGE_SEND_METHOD};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// One piece of message content. Only text parts are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: None,
            text: Some(text.into()),
        }
    }
}

/// A message sent between agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct A2aMessage {
    /// Fresh for every message, never reused
    #[serde(alias = "messageId")]
    pub message_id: String,
    pub role: Role,
    pub parts: Vec<Part>,
}

impl A2aMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            message_id: Uuid::new_v4().to_string(),
            role,
            parts: vec![Part::text(text)],
        }
    }

    /// All text parts joined by newlines, `None` when there are none
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join("\n"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSendParams {
    pub message: A2aMessage,
}

/// Outbound JSON-RPC request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct A2aRequest {
    pub id: Value,
    pub jsonrpc: String,
    pub method: String,
    pub params: MessageSendParams,
}

impl A2aRequest {
    /// Wrap `text` in a `message/send` request from the user role
    pub fn message_send(client_id: &str, text: impl Into<String>) -> Self {
        Self {
            id: Value::String(client_id.to_string()),
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: MESSAGE_SEND_METHOD.to_string(),
            params: MessageSendParams {
                message: A2aMessage::new(Role::User, text),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub state: String,
}

impl TaskStatus {
    pub fn completed() -> Self {
        Self {
            state: "completed".to_string(),
        }
    }
}

/// Result of a `message/send` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub context_id: String,
    pub kind: String,
    pub status: TaskStatus,
    pub history: Vec<A2aMessage>,
}

impl Task {
    /// A finished task whose history is the request followed by the reply
    pub fn completed(request: A2aMessage, reply: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            context_id: Uuid::new_v4().to_string(),
            kind: "task".to_string(),
            status: TaskStatus::completed(),
            history: vec![request, A2aMessage::new(Role::Agent, reply)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// JSON-RPC response carrying either a task or an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct A2aResponse {
    pub id: Value,
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl A2aResponse {
    pub fn success(id: Value, task: Task) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(task),
            error: None,
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Pull the reply text out of a response body.
///
/// Every level may be missing or of the wrong type; any gap yields `None`.
pub fn reply_text(body: &Value) -> Option<String> {
    body.get("result")?
        .get("history")?
        .as_array()?
        .last()?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

/// Reply text, or the no-text message naming the agent at `url`
pub fn decode_reply(body: &Value, url: &str) -> String {
    reply_text(body).unwrap_or_else(|| no_text_found(url))
}

pub fn no_text_found(url: &str) -> String {
    format!(
        "System Error: The agent at {} responded, but no text message was found in the history.",
        url
    )
}

pub fn connection_error(url: &str, detail: impl std::fmt::Display) -> String {
    format!(
        "Connection Error: Could not talk to agent at {}. Details: {}",
        url, detail
    )
}
