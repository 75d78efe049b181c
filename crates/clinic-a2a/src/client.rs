//! Remote agent client
//!
//! One POST per call, no retries. Whatever goes wrong (refused connection,
//! timeout, error status, a body that is not JSON) comes back as a
//! `Connection Error: ...` string naming the target URL, so the calling agent
//! can react to it in conversation.

use crate::envelope::{A2aRequest, connection_error, decode_reply};
use clinic_common::{AgentEndpoints, ClinicError, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct RemoteAgentClient {
    http: reqwest::Client,
    client_id: String,
}

impl RemoteAgentClient {
    pub fn new(client_id: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClinicError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            client_id: client_id.into(),
        })
    }

    pub fn from_endpoints(endpoints: &AgentEndpoints) -> Result<Self> {
        Self::new(endpoints.client_id.clone(), endpoints.timeout())
    }

    /// Send `text` to the agent at `url` and return its reply text.
    ///
    /// Never fails: transport and protocol problems are reported in the
    /// returned string.
    pub async fn call(&self, url: &str, text: &str) -> String {
        let request = A2aRequest::message_send(&self.client_id, text);
        debug!(
            "Sending message {} to {}",
            request.params.message.message_id, url
        );

        match self.exchange(url, &request).await {
            Ok(body) => {
                debug!("Agent at {} answered", url);
                decode_reply(&body, url)
            }
            Err(e) => {
                warn!("Call to agent at {} failed: {}", url, e);
                connection_error(url, e)
            }
        }
    }

    async fn exchange(
        &self,
        url: &str,
        request: &A2aRequest,
    ) -> std::result::Result<Value, reqwest::Error> {
        self.http
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{A2aResponse, Task};
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::json;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{}/a2a/agents/test_agent/v1/message:send", addr)
    }

    async fn echo(Json(request): Json<A2aRequest>) -> Json<A2aResponse> {
        let text = format!("echo: {}", request.params.message.text().unwrap_or_default());
        Json(A2aResponse::success(
            request.id.clone(),
            Task::completed(request.params.message, text),
        ))
    }

    fn client() -> RemoteAgentClient {
        RemoteAgentClient::new("test_client", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_call_returns_reply_text() {
        let url = serve(Router::new().route("/a2a/agents/test_agent/v1/:action", post(echo))).await;
        assert_eq!(client().call(&url, "head pounding").await, "echo: head pounding");
    }

    #[tokio::test]
    async fn test_request_carries_client_id_and_method() {
        let app = Router::new().route(
            "/a2a/agents/test_agent/v1/:action",
            post(|Json(body): Json<Value>| async move {
                let summary = format!("{} {} {}", body["id"], body["jsonrpc"], body["method"]);
                Json(json!({"result": {"history": [{"parts": [{"text": summary}]}]}}))
            }),
        );
        let url = serve(app).await;
        assert_eq!(
            client().call(&url, "x").await,
            r#""test_client" "2.0" "message/send""#
        );
    }

    #[tokio::test]
    async fn test_unexpected_shape_yields_sentinel() {
        let app = Router::new().route(
            "/a2a/agents/test_agent/v1/:action",
            post(|| async { Json(json!({"result": {"history": []}})) }),
        );
        let url = serve(app).await;
        let reply = client().call(&url, "hello").await;
        assert!(reply.starts_with("System Error"));
        assert!(reply.contains(&url));
    }

    #[tokio::test]
    async fn test_error_status_is_connection_error() {
        let app = Router::new().route(
            "/a2a/agents/test_agent/v1/:action",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let url = serve(app).await;
        let reply = client().call(&url, "hello").await;
        assert!(reply.starts_with("Connection Error"));
        assert!(reply.contains(&url));
    }

    #[tokio::test]
    async fn test_non_json_body_is_connection_error() {
        let app = Router::new().route(
            "/a2a/agents/test_agent/v1/:action",
            post(|| async { "plain text, not json" }),
        );
        let url = serve(app).await;
        assert!(client().call(&url, "hello").await.starts_with("Connection Error"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = format!("http://{}/a2a/agents/gone/v1/message:send", addr);

        let reply = client().call(&url, "anyone there?").await;
        assert!(reply.contains("Connection Error"));
        assert!(reply.contains(&url));
    }

    #[tokio::test]
    async fn test_slow_agent_times_out() {
        let app = Router::new().route(
            "/a2a/agents/test_agent/v1/:action",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({}))
            }),
        );
        let url = serve(app).await;
        let client = RemoteAgentClient::new("test_client", Duration::from_millis(200)).unwrap();
        assert!(client.call(&url, "hello").await.starts_with("Connection Error"));
    }
}
