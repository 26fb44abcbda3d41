use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Ephemeral conversation state for one UI session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub messages: Vec<Message>,
    /// Set once a turn has been sent to the remote side under this id
    pub initialized: bool,
    pub started_at: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
            initialized: false,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Random session id for starting a fresh remote conversation
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Switch to another id, dropping all history. Same id is a no-op.
    /// Returns whether anything changed.
    pub fn reset_to(&mut self, session_id: &str) -> bool {
        if self.session_id == session_id {
            return false;
        }
        *self = Session::new(session_id);
        true
    }

    /// Keep only the most recent `max_messages` entries.
    /// Returns how many were dropped.
    pub fn trim_to(&mut self, max_messages: usize) -> usize {
        let excess = self.messages.len().saturating_sub(max_messages);
        if excess > 0 {
            self.messages.drain(..excess);
        }
        excess
    }

    /// Completed user/assistant pairs, as shown in the sidebar caption
    pub fn pair_count(&self) -> usize {
        self.messages.len() / 2
    }
}
