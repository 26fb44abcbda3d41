use serde::{Deserialize, Serialize};

/// Events emitted by the chat controller.
/// UI subscribes to these for status updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A user message was accepted and the request is in flight
    TurnStart { turn_id: u64, session_id: String },

    /// The workflow replied (possibly with error text)
    ReplyComplete { text: String },

    /// The turn finished and the controller is idle again
    TurnEnd { turn_id: u64 },

    /// Oldest messages were dropped to respect the history limit
    HistoryTrimmed { dropped: usize },

    /// The session id changed and history was reset
    SessionChanged { session_id: String },

    /// History was cleared, session id kept
    HistoryCleared,

    /// A reply arrived for a session that was reset while it was in flight
    ReplyDiscarded { turn_id: u64 },
}
