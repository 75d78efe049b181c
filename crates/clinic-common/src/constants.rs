//! Common constants used across the clinic agents

/// JSON-RPC version literal carried by every envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// The only A2A method the agents speak
pub const MESSAGE_SEND_METHOD: &str = "message/send";

/// Status written on every patient record
pub const REGISTERED_STATUS: &str = "registered";

/// Request id used by the triage client when none is configured
pub const DEFAULT_CLIENT_ID: &str = "clinic_triage_client";

/// Agent identifiers as they appear in A2A endpoint paths
pub mod agent_ids {
    pub const REGISTRAR: &str = "doctor_office_agent";
}

/// Default endpoints, matching the ports each agent is served on
pub mod endpoints {
    pub const DEFAULT_ADVISOR_URL: &str =
        "http://localhost:7778/a2a/agents/medical_advisor/v1/message:send";
    pub const DEFAULT_REGISTRAR_URL: &str =
        "http://localhost:7779/a2a/agents/doctor_office_agent/v1/message:send";
    pub const DEFAULT_REGISTRAR_PORT: u16 = 7779;
}

/// Default timeout values in seconds
pub mod timeouts {
    pub const DEFAULT_AGENT_CALL_TIMEOUT: u64 = 30;
}

/// JSON-RPC error codes returned by the A2A host
pub mod rpc_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}
