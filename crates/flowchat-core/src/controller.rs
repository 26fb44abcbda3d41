//! Chat controller: owns one session and its rolling history.
//!
//! A turn is split into `begin_turn` / `complete_turn` so the UI can keep
//! the controller in an `Rc<RefCell<_>>` and release the borrow while the
//! request is in flight. `handle_input` runs both halves back to back.

use flowchat_types::{
    config::ChatConfig,
    event::ChatEvent,
    message::{Message, Role},
    session::Session,
};
use crate::client::FlowClient;
use crate::event_bus::EventBus;

pub struct ChatController {
    session: Session,
    max_messages: usize,
    event_bus: EventBus,
    pending: Option<u64>,
    /// Bumped on every reset so late replies can be recognised
    generation: u64,
    turn_counter: u64,
}

/// A user message that has been recorded and is waiting for its reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub turn_id: u64,
    pub prompt: String,
    pub session_id: String,
    generation: u64,
}

/// One rendered transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub role: Role,
    pub content: String,
}

impl ChatController {
    pub fn new(config: &ChatConfig, event_bus: EventBus) -> Self {
        Self {
            session: Session::new(config.default_session_id.clone()),
            max_messages: config.max_messages(),
            event_bus,
            pending: None,
            generation: 0,
            turn_counter: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_id(&self) -> &str {
        &self.session.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.session.messages
    }

    pub fn pair_count(&self) -> usize {
        self.session.pair_count()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Stored messages in order, tagged by role
    pub fn display(&self) -> Vec<DisplayEntry> {
        self.session
            .messages
            .iter()
            .map(|m| DisplayEntry {
                role: m.role,
                content: m.content.clone(),
            })
            .collect()
    }

    /// Record the user message and hand back what must be sent.
    /// The prompt is stored and sent exactly as typed. Returns `None` for
    /// empty input or while another turn is in flight.
    pub fn begin_turn(&mut self, prompt: &str) -> Option<PendingTurn> {
        if prompt.is_empty() {
            return None;
        }
        if let Some(turn_id) = self.pending {
            log::debug!("Turn {} still in flight, ignoring input", turn_id);
            return None;
        }

        self.turn_counter += 1;
        let turn_id = self.turn_counter;

        self.session.messages.push(Message::user(prompt));
        self.session.initialized = true;
        self.trim();
        self.pending = Some(turn_id);

        self.event_bus.emit(ChatEvent::TurnStart {
            turn_id,
            session_id: self.session.session_id.clone(),
        });

        Some(PendingTurn {
            turn_id,
            prompt: prompt.to_string(),
            session_id: self.session.session_id.clone(),
            generation: self.generation,
        })
    }

    /// Store the reply for a turn started by `begin_turn`.
    /// Returns false when the session was reset in the meantime and the
    /// reply was dropped.
    pub fn complete_turn(&mut self, turn: PendingTurn, reply: String) -> bool {
        if self.pending == Some(turn.turn_id) {
            self.pending = None;
        }

        if turn.generation != self.generation {
            log::info!(
                "Dropping reply for turn {} (session {} was reset)",
                turn.turn_id,
                turn.session_id
            );
            self.event_bus.emit(ChatEvent::ReplyDiscarded { turn_id: turn.turn_id });
            self.event_bus.emit(ChatEvent::TurnEnd { turn_id: turn.turn_id });
            return false;
        }

        self.session.messages.push(Message::assistant(reply.clone()));
        self.event_bus.emit(ChatEvent::ReplyComplete { text: reply });
        self.trim();
        self.event_bus.emit(ChatEvent::TurnEnd { turn_id: turn.turn_id });
        true
    }

    /// Send one user message and store the reply.
    pub async fn handle_input(&mut self, prompt: &str, client: &FlowClient) -> bool {
        let Some(turn) = self.begin_turn(prompt) else {
            return false;
        };
        let reply = client.send(&turn.prompt, &turn.session_id).await;
        self.complete_turn(turn, reply)
    }

    /// Switch sessions. A different id (even an empty one) wipes history;
    /// the same id changes nothing.
    pub fn change_session(&mut self, new_id: &str) -> bool {
        if !self.session.reset_to(new_id) {
            return false;
        }
        self.generation += 1;
        log::info!("Session changed to '{}'", new_id);
        self.event_bus.emit(ChatEvent::SessionChanged {
            session_id: new_id.to_string(),
        });
        true
    }

    /// Switch to a freshly generated session id and return it
    pub fn new_session(&mut self) -> String {
        let id = Session::generate_id();
        self.change_session(&id);
        id
    }

    /// Drop all messages but keep the session id
    pub fn clear(&mut self) {
        self.session.messages.clear();
        self.generation += 1;
        self.event_bus.emit(ChatEvent::HistoryCleared);
    }

    /// Apply a new history limit (in message pairs) right away
    pub fn set_max_history(&mut self, pairs: usize) {
        self.max_messages = pairs * 2;
        self.trim();
    }

    fn trim(&mut self) {
        let dropped = self.session.trim_to(self.max_messages);
        if dropped > 0 {
            log::debug!("Trimmed {} old message(s) from history", dropped);
            self.event_bus.emit(ChatEvent::HistoryTrimmed { dropped });
        }
    }
}
