//! A2A endpoints for the hosted agents

use axum::{
    Router,
    body::Bytes,
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clinic_framework::a2a::{A2aRequest, A2aResponse, Task};
use clinic_framework::agents::{AgentInfo, AgentRegistry};
use clinic_framework::common::{MESSAGE_SEND_METHOD, rpc_codes};
use serde_json::Value;
use tracing::{debug, error, info, warn};

const MESSAGE_SEND_ACTION: &str = "message:send";

#[derive(Clone)]
pub struct A2aState {
    pub agents: AgentRegistry,
}

fn rpc_error(status: StatusCode, id: Value, code: i64, message: impl Into<String>) -> Response {
    (status, Json(A2aResponse::error(id, code, message))).into_response()
}

/// Handler for agent messages.
/// POST /a2a/agents/:agent_id/v1/message:send
pub async fn message_send(
    State(state): State<A2aState>,
    Path((agent_id, action)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    if action != MESSAGE_SEND_ACTION {
        return StatusCode::NOT_FOUND.into_response();
    }

    let raw: Value = match serde_json::from_slice(&body) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Unparseable A2A body for {}: {}", agent_id, e);
            return rpc_error(
                StatusCode::OK,
                Value::Null,
                rpc_codes::PARSE_ERROR,
                format!("Parse error: {}", e),
            );
        }
    };
    let id = raw.get("id").cloned().unwrap_or(Value::Null);

    let request: A2aRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(e) => {
            return rpc_error(
                StatusCode::OK,
                id,
                rpc_codes::INVALID_PARAMS,
                format!("Invalid params: {}", e),
            );
        }
    };

    if request.method != MESSAGE_SEND_METHOD {
        return rpc_error(
            StatusCode::OK,
            id,
            rpc_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        );
    }

    if !state.agents.has_agent(&agent_id).await {
        return rpc_error(
            StatusCode::NOT_FOUND,
            id,
            rpc_codes::METHOD_NOT_FOUND,
            format!("Agent not found: {}", agent_id),
        );
    }

    let Some(text) = request.params.message.text() else {
        return rpc_error(
            StatusCode::OK,
            id,
            rpc_codes::INVALID_PARAMS,
            "Message has no text parts",
        );
    };

    debug!("Message {} for {}", request.params.message.message_id, agent_id);
    match state.agents.send_message_and_wait(&agent_id, &text).await {
        Ok(reply) => {
            info!(
                "Agent {} answered message {}",
                agent_id, request.params.message.message_id
            );
            let task = Task::completed(request.params.message, reply);
            (StatusCode::OK, Json(A2aResponse::success(id, task))).into_response()
        }
        Err(e) => {
            error!("Agent {} failed: {}", agent_id, e);
            rpc_error(StatusCode::OK, id, rpc_codes::INTERNAL_ERROR, e.to_string())
        }
    }
}

/// Handler to list hosted agents.
/// GET /agents
pub async fn list_agents(State(state): State<A2aState>) -> Json<Vec<AgentInfo>> {
    let mut infos = Vec::new();
    for agent_id in state.agents.list_agents().await {
        if let Some(info) = state.agents.get_agent_info(&agent_id).await {
            infos.push(info);
        }
    }
    Json(infos)
}

/// Register A2A routes
pub fn a2a_routes(state: A2aState) -> Router {
    Router::new()
        .route("/a2a/agents/:agent_id/v1/:action", post(message_send))
        .route("/agents", get(list_agents))
        .with_state(state)
}
