//! Workflow-execution client.
//!
//! Builds the `run` payload, posts it through an [`HttpPort`], and digs the
//! chat reply out of the loosely-structured response. Every failure is
//! turned into reply text, so callers always get something to show.

use std::rc::Rc;
use serde_json::Value;

use flowchat_types::{
    ChatError, Result,
    config::ChatConfig,
    payload::RunRequest,
};
use crate::ports::{HttpPort, HttpRequest};

pub const CONNECTION_ERROR_PREFIX: &str = "Error connecting to Langflow API";
pub const UNEXPECTED_ERROR_PREFIX: &str = "An unexpected error occurred";

pub struct FlowClient {
    config: ChatConfig,
    http: Rc<dyn HttpPort>,
}

impl FlowClient {
    pub fn new(config: ChatConfig, http: Rc<dyn HttpPort>) -> Self {
        Self { config, http }
    }

    /// Send with the configured sender name and no files
    pub async fn send(&self, message: &str, session_id: &str) -> String {
        self.send_message(message, session_id, &self.config.sender_name, &[])
            .await
    }

    /// Run the flow for one user message and return the reply text.
    ///
    /// Never fails: transport problems and unexpected errors come back as
    /// descriptive text in place of a reply.
    pub async fn send_message(
        &self,
        message: &str,
        session_id: &str,
        sender_name: &str,
        files: &[String],
    ) -> String {
        match self.run(message, session_id, sender_name, files).await {
            Ok(reply) => reply,
            Err(e) if e.is_transport() => {
                log::warn!("Flow request to {} failed: {}", self.config.api_url, e);
                format!("{}: {}", CONNECTION_ERROR_PREFIX, e)
            }
            Err(e) => {
                log::warn!("Flow request failed unexpectedly: {}", e);
                format!("{}: {}", UNEXPECTED_ERROR_PREFIX, e)
            }
        }
    }

    pub fn build_payload(
        &self,
        message: &str,
        session_id: &str,
        sender_name: &str,
        files: &[String],
    ) -> RunRequest {
        RunRequest::chat(
            &self.config.component_key,
            message,
            session_id,
            sender_name,
            files.to_vec(),
        )
    }

    async fn run(
        &self,
        message: &str,
        session_id: &str,
        sender_name: &str,
        files: &[String],
    ) -> Result<String> {
        let payload = self.build_payload(message, session_id, sender_name, files);
        let body = serde_json::to_string(&payload)?;

        log::debug!(
            "POST {} via {} (session {})",
            self.config.api_url,
            self.http.backend_name(),
            session_id
        );

        let response = self
            .http
            .post(HttpRequest {
                url: self.config.api_url.clone(),
                headers: self
                    .config
                    .headers
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
                body,
                timeout_ms: self.config.timeout_ms,
            })
            .await?;

        if !response.is_success() {
            return Err(ChatError::Http {
                status: response.status,
                message: format!("{} for url: {}", response.status_text, self.config.api_url),
            });
        }

        Ok(reply_from_body(&response.body))
    }
}

/// Turn a 2xx response body into reply text.
///
/// Non-JSON bodies are returned verbatim minus surrounding quotes; JSON
/// bodies without a chat message are returned stringified.
pub fn reply_from_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => match extract_reply(&value) {
            Some(text) => text.to_string(),
            None => {
                log::debug!("No chat message in flow response, returning raw body");
                stringify_body(&value)
            }
        },
        Err(e) => {
            log::warn!("Flow response is not JSON ({}), returning raw text", e);
            body.trim_matches('"').to_string()
        }
    }
}

/// Find `outputs[0].outputs[*].results.message.data.text`.
///
/// Inner outputs without `results`, or whose message has no usable text,
/// are skipped. A `results` or `data` that is not an object ends the search.
pub fn extract_reply(body: &Value) -> Option<&str> {
    let first = body.get("outputs")?.as_array()?.first()?;
    let entries = first.get("outputs")?.as_array()?;

    for entry in entries {
        let Some(results) = entry.get("results") else {
            continue;
        };
        let results = results.as_object()?;

        let Some(message) = results.get("message").and_then(Value::as_object) else {
            continue;
        };
        let Some(data) = message.get("data") else {
            continue;
        };
        let data = data.as_object()?;

        match data.get("text").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => return Some(text),
            _ => continue,
        }
    }

    None
}

/// Whole-body fallback text. Bare JSON strings lose their quotes.
pub fn stringify_body(body: &Value) -> String {
    match body {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
