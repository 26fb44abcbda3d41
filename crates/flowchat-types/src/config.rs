use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::{ChatError, Result};

pub const DEFAULT_API_URL: &str =
    "http://127.0.0.1:7860/api/v1/run/d2728a04-3aaa-49d2-998f-f1a8d22d7d8c";
pub const DEFAULT_COMPONENT_KEY: &str = "ChatInput-vEZZd";
pub const DEFAULT_SENDER_NAME: &str = "User";
pub const DEFAULT_SESSION_ID: &str = "default_session";
/// Message pairs (user + assistant) kept in the transcript
pub const DEFAULT_MAX_HISTORY: usize = 20;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_API_URL: &str = "LANGFLOW_API_URL";
pub const ENV_COMPONENT_KEY: &str = "LANGFLOW_COMPONENT_KEY";
pub const ENV_SENDER_NAME: &str = "LANGFLOW_SENDER_NAME";
pub const ENV_DEFAULT_SESSION: &str = "LANGFLOW_DEFAULT_SESSION";
pub const ENV_MAX_HISTORY: &str = "LANGFLOW_MAX_HISTORY";
pub const ENV_TIMEOUT_MS: &str = "LANGFLOW_TIMEOUT_MS";

/// Top-level front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    pub api_url: String,
    pub headers: BTreeMap<String, String>,
    /// Key of the chat input component inside `tweaks`
    pub component_key: String,
    pub sender_name: String,
    pub default_session_id: String,
    pub max_history: usize,
    pub timeout_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            headers: default_headers(),
            component_key: DEFAULT_COMPONENT_KEY.to_string(),
            sender_name: DEFAULT_SENDER_NAME.to_string(),
            default_session_id: DEFAULT_SESSION_ID.to_string(),
            max_history: DEFAULT_MAX_HISTORY,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ChatConfig {
    /// Build a config from defaults plus environment-style overrides.
    ///
    /// `lookup` is asked for each `LANGFLOW_*` key; empty values are
    /// ignored, and numbers that fail to parse keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config.api_url = url.trim().to_string();
        }
        if let Some(key) = get(ENV_COMPONENT_KEY) {
            config.component_key = key;
        }
        if let Some(name) = get(ENV_SENDER_NAME) {
            config.sender_name = name;
        }
        if let Some(id) = get(ENV_DEFAULT_SESSION) {
            config.default_session_id = id;
        }
        if let Some(n) = get(ENV_MAX_HISTORY).and_then(|v| v.trim().parse().ok()) {
            config.max_history = n;
        }
        if let Some(ms) = get(ENV_TIMEOUT_MS).and_then(|v| v.trim().parse().ok()) {
            config.timeout_ms = ms;
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(ChatError::Config("API URL is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ChatError::Config(format!(
                "API URL must start with http:// or https://: {}",
                url
            )));
        }
        if self.component_key.trim().is_empty() {
            return Err(ChatError::Config("component key is empty".to_string()));
        }
        if self.max_history == 0 {
            return Err(ChatError::Config("max history must be at least 1".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(ChatError::Config("timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// Upper bound on stored messages (user + assistant entries)
    pub fn max_messages(&self) -> usize {
        self.max_history * 2
    }
}

fn default_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}
