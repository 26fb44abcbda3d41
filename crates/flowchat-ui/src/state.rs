//! UI-level state that drives rendering.
//!
//! The transcript itself lives in the controller; this only holds what the
//! widgets edit plus a status line fed from the event bus.

use egui_commonmark::CommonMarkCache;
use flowchat_types::config::ChatConfig;
use flowchat_types::event::ChatEvent;

/// State visible to UI panels
pub struct UiState {
    /// Chat input field content
    pub input_text: String,
    /// Sidebar session id field; applied when editing finishes
    pub session_input: String,
    /// Whether the settings panel is open
    pub show_settings: bool,
    /// Editable copy of the config shown in the settings panel
    pub settings_draft: ChatConfig,
    pub settings_feedback: Option<SettingsFeedback>,
    pub status_text: String,
    /// Set between TurnStart and TurnEnd
    pub turn_in_flight: bool,
    /// Parsed markdown and image state for transcript rendering
    pub markdown_cache: CommonMarkCache,
}

/// Result of the last "Apply" in the settings panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFeedback {
    pub message: String,
    pub success: bool,
}

impl UiState {
    pub fn new(config: &ChatConfig, session_id: &str) -> Self {
        Self {
            input_text: String::new(),
            session_input: session_id.to_string(),
            show_settings: false,
            settings_draft: config.clone(),
            settings_feedback: None,
            status_text: "Ready".to_string(),
            turn_in_flight: false,
            markdown_cache: CommonMarkCache::default(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::TurnStart { .. } => {
                    self.turn_in_flight = true;
                    self.status_text = "Thinking...".to_string();
                }
                ChatEvent::ReplyComplete { .. } => {}
                ChatEvent::TurnEnd { .. } => {
                    self.turn_in_flight = false;
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::HistoryTrimmed { dropped } => {
                    log::debug!("{} message(s) fell out of history", dropped);
                }
                ChatEvent::SessionChanged { session_id } => {
                    self.status_text = format!("Session: {}", session_id);
                    self.session_input = session_id;
                }
                ChatEvent::HistoryCleared if self.turn_in_flight => {
                    self.status_text =
                        "History cleared, waiting for the previous reply to be discarded".to_string();
                }
                ChatEvent::HistoryCleared => {
                    self.status_text = "History cleared".to_string();
                }
                ChatEvent::ReplyDiscarded { .. } => {
                    self.status_text = "Discarded reply from previous session".to_string();
                }
            }
        }
    }

    /// Take the input for sending exactly as typed, leaving the field empty.
    /// An empty field yields nothing.
    pub fn take_input(&mut self) -> Option<String> {
        if self.input_text.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.input_text))
    }
}
