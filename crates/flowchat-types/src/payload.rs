//! Request payload for the workflow-execution `run` endpoint.
//!
//! Shape on the wire:
//!
//! ```json
//! {
//!   "input_value": "...",
//!   "output_type": "chat",
//!   "input_type": "chat",
//!   "tweaks": { "<component>": { "files": [], "sender_name": "User", "session_id": "..." } }
//! }
//! ```

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

pub const CHAT_IO_TYPE: &str = "chat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub input_value: String,
    pub output_type: String,
    pub input_type: String,
    /// Per-call overrides keyed by component id
    pub tweaks: BTreeMap<String, ChatInputTweak>,
}

/// Overrides injected into the chat input component of the flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatInputTweak {
    pub files: Vec<String>,
    pub sender_name: String,
    pub session_id: String,
}

impl RunRequest {
    pub fn chat(
        component_key: &str,
        message: impl Into<String>,
        session_id: impl Into<String>,
        sender_name: impl Into<String>,
        files: Vec<String>,
    ) -> Self {
        let mut tweaks = BTreeMap::new();
        tweaks.insert(
            component_key.to_string(),
            ChatInputTweak {
                files,
                sender_name: sender_name.into(),
                session_id: session_id.into(),
            },
        );

        Self {
            input_value: message.into(),
            output_type: CHAT_IO_TYPE.to_string(),
            input_type: CHAT_IO_TYPE.to_string(),
            tweaks,
        }
    }
}
