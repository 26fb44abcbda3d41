//! Chat panel: transcript plus the message input.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};
use flowchat_core::controller::DisplayEntry;
use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns Some(message) when user submits input.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    transcript: &[DisplayEntry],
    busy: bool,
) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Langflow Chat").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if busy { WARNING } else { SUCCESS };
                        ui.label(RichText::new(&state.status_text).color(status_color).small());
                    });
                });

                ui.separator();

                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if transcript.is_empty() {
                            ui.label(
                                RichText::new("No messages yet. Say hello below.")
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                            );
                        }
                        for entry in transcript {
                            render_message(ui, entry, &mut state.markdown_cache);
                            ui.add_space(4.0);
                        }
                        if busy {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Thinking...").color(TEXT_SECONDARY));
                            });
                        }
                    });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Type your message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add_enabled(!busy, input);

                    let send_enabled = !state.input_text.trim().is_empty() && !busy;
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if (enter && send_enabled) || send_btn.clicked() {
                        submitted = state.take_input();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

/// Both roles are rendered as markdown; flow replies routinely carry lists
/// and code blocks.
fn render_message(ui: &mut egui::Ui, entry: &DisplayEntry, cache: &mut CommonMarkCache) {
    let (label, label_color, bg) = role_style(entry.role);

    egui::Frame::default()
        .fill(bg)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.visuals_mut().override_text_color = Some(TEXT_PRIMARY);
            CommonMarkViewer::new().show(ui, cache, &entry.content);
        });
}
