//! Clinic A2A - agent-to-agent messaging
//!
//! This crate provides the JSON-RPC envelope types exchanged between the
//! agents and a client that performs one request/response exchange per call,
//! folding every failure into a readable string.

pub mod client;
pub mod envelope;

pub use client::RemoteAgentClient;
pub use envelope::{
    A2aMessage, A2aRequest, A2aResponse, MessageSendParams, Part, Role, RpcError, Task,
    TaskStatus, connection_error, decode_reply, no_text_found, reply_text,
};
