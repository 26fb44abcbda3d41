//! Settings panel: endpoint, tweak component, sender name, history size.
//! Edits a draft; nothing takes effect until Apply is clicked.

use egui::{self, RichText, Vec2};
use flowchat_types::config::ChatConfig;
use crate::state::SettingsFeedback;
use crate::theme::*;

pub enum SettingsAction {
    None,
    /// A field was edited
    Changed,
    ApplyClicked,
    ResetClicked,
}

pub fn settings_panel(
    ui: &mut egui::Ui,
    draft: &mut ChatConfig,
    feedback: Option<&SettingsFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut apply_clicked = false;
    let mut reset_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Endpoint").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("API URL").color(TEXT_SECONDARY).small());
            let url_edit = egui::TextEdit::singleline(&mut draft.api_url)
                .hint_text("http://127.0.0.1:7860/api/v1/run/<flow-id>")
                .desired_width(f32::INFINITY);
            if ui.add(url_edit).changed() {
                changed = true;
            }

            ui.add_space(4.0);

            ui.label(RichText::new("Chat input component").color(TEXT_SECONDARY).small());
            if ui.text_edit_singleline(&mut draft.component_key).changed() {
                changed = true;
            }

            ui.add_space(4.0);

            ui.label(RichText::new("Timeout (ms)").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::DragValue::new(&mut draft.timeout_ms).range(1_000..=300_000).speed(500))
                .changed()
            {
                changed = true;
            }

            ui.add_space(12.0);
            ui.label(RichText::new("Conversation").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Sender name").color(TEXT_SECONDARY).small());
            if ui.text_edit_singleline(&mut draft.sender_name).changed() {
                changed = true;
            }

            ui.add_space(4.0);

            ui.label(RichText::new("Max history (message pairs)").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::DragValue::new(&mut draft.max_history).range(1..=200))
                .changed()
            {
                changed = true;
            }

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let apply = ui.add(
                    egui::Button::new(RichText::new("Apply").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(80.0, 28.0)),
                );
                if apply.clicked() {
                    apply_clicked = true;
                }
                if ui.button("Reset").clicked() {
                    reset_clicked = true;
                }
            });

            if let Some(fb) = feedback {
                let color = if fb.success { SUCCESS } else { ERROR };
                ui.label(RichText::new(&fb.message).color(color).small());
            }
        });

    if apply_clicked {
        SettingsAction::ApplyClicked
    } else if reset_clicked {
        SettingsAction::ResetClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}

/// Validate a draft for Apply, producing the feedback line to show
pub fn check_draft(draft: &ChatConfig) -> SettingsFeedback {
    match draft.validate() {
        Ok(()) => SettingsFeedback {
            message: "Settings applied".to_string(),
            success: true,
        },
        Err(e) => SettingsFeedback {
            message: e.to_string(),
            success: false,
        },
    }
}
