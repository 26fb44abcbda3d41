//! Session sidebar: session id field, reset buttons, history caption.

use egui::{self, RichText, Vec2};
use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    None,
    /// Switch to this id (history is wiped if it differs)
    ChangeSession(String),
    NewSession,
    ClearChat,
}

/// Read-only facts about the current session
pub struct SessionInfo<'a> {
    pub session_id: &'a str,
    pub pair_count: usize,
    pub started_at: &'a str,
}

pub fn session_panel(ui: &mut egui::Ui, state: &mut UiState, info: &SessionInfo<'_>) -> SessionAction {
    let mut action = SessionAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Session Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Session ID").color(TEXT_SECONDARY).small());
            let response = ui.text_edit_singleline(&mut state.session_input);
            if response.lost_focus() {
                action = session_edit_action(&state.session_input, info.session_id);
            }

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new(RichText::new("New Session").color(TEXT_PRIMARY))
                            .fill(BG_SURFACE)
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(100.0, 26.0)),
                    )
                    .clicked()
                {
                    action = SessionAction::NewSession;
                }
                if ui
                    .add(
                        egui::Button::new(RichText::new("Clear Chat").color(TEXT_PRIMARY))
                            .fill(BG_SURFACE)
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(100.0, 26.0)),
                    )
                    .clicked()
                {
                    action = SessionAction::ClearChat;
                }
            });

            ui.add_space(8.0);
            ui.separator();
            for line in caption_lines(info) {
                ui.label(RichText::new(line).color(TEXT_SECONDARY).small());
            }
        });

    action
}

/// Editing finished: only a different id is a change
pub fn session_edit_action(edited: &str, current: &str) -> SessionAction {
    if edited != current {
        SessionAction::ChangeSession(edited.to_string())
    } else {
        SessionAction::None
    }
}

pub fn caption_lines(info: &SessionInfo<'_>) -> Vec<String> {
    vec![
        format!("Current Session: `{}`", info.session_id),
        format!("Messages in history: {}", info.pair_count),
        format!("Started: {}", info.started_at),
    ]
}
