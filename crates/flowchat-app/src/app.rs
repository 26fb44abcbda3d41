//! Main egui application: composes the panels and drives the controller.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use flowchat_core::client::FlowClient;
use flowchat_core::controller::ChatController;
use flowchat_core::event_bus::EventBus;
use flowchat_core::ports::HttpPort;
use flowchat_platform::http::FetchHttp;
use flowchat_types::config::*;
use flowchat_ui::panels::session::{SessionAction, SessionInfo};
use flowchat_ui::panels::settings::{self, SettingsAction};
use flowchat_ui::panels::{chat, session};
use flowchat_ui::state::UiState;
use flowchat_ui::theme;

pub struct FlowchatApp {
    ui_state: UiState,
    config: ChatConfig,
    event_bus: EventBus,
    controller: Rc<RefCell<ChatController>>,
    client: Rc<FlowClient>,
    http: Rc<dyn HttpPort>,
    first_frame: bool,
}

impl FlowchatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = load_config();
        let event_bus = EventBus::new();
        let controller = ChatController::new(&config, event_bus.clone());
        let http: Rc<dyn HttpPort> = Rc::new(FetchHttp::new());
        let client = Rc::new(FlowClient::new(config.clone(), http.clone()));

        log::info!(
            "Using endpoint {} (session '{}', {} pairs of history)",
            config.api_url,
            controller.session_id(),
            config.max_history
        );

        Self {
            ui_state: UiState::new(&config, controller.session_id()),
            config,
            event_bus,
            controller: Rc::new(RefCell::new(controller)),
            client,
            http,
            first_frame: true,
        }
    }

    /// Record the message and send it without holding the controller
    /// borrow across the request.
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let Some(turn) = self.controller.borrow_mut().begin_turn(&text) else {
            return;
        };
        let controller = self.controller.clone();
        let client = self.client.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let reply = client.send(&turn.prompt, &turn.session_id).await;
            controller.borrow_mut().complete_turn(turn, reply);
            ctx.request_repaint();
        });
    }

    fn apply_session_action(&mut self, action: SessionAction) {
        let mut controller = self.controller.borrow_mut();
        match action {
            SessionAction::None => {}
            SessionAction::ChangeSession(id) => {
                controller.change_session(&id);
            }
            SessionAction::NewSession => {
                controller.new_session();
            }
            SessionAction::ClearChat => controller.clear(),
        }
    }

    fn apply_settings(&mut self) {
        let feedback = settings::check_draft(&self.ui_state.settings_draft);
        if feedback.success {
            self.config = self.ui_state.settings_draft.clone();
            self.client = Rc::new(FlowClient::new(self.config.clone(), self.http.clone()));
            self.controller
                .borrow_mut()
                .set_max_history(self.config.max_history);
            log::info!("Settings applied, endpoint {}", self.config.api_url);
        } else {
            log::warn!("Rejected settings: {}", feedback.message);
        }
        self.ui_state.settings_feedback = Some(feedback);
    }
}

impl eframe::App for FlowchatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("💬 Langflow Chat").strong().color(theme::ACCENT).size(16.0));
                ui.separator();
                ui.label(
                    RichText::new(format!("Endpoint: {}", self.config.api_url))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                });
            });
        });

        // ── Session sidebar ──────────────────────────────────
        let session_action = SidePanel::left("session_panel")
            .min_width(220.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                let controller = self.controller.borrow();
                let info = SessionInfo {
                    session_id: controller.session_id(),
                    pair_count: controller.pair_count(),
                    started_at: &controller.session().started_at,
                };
                session::session_panel(ui, &mut self.ui_state, &info)
            })
            .inner;
        self.apply_session_action(session_action);

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            let action = SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    settings::settings_panel(
                        ui,
                        &mut self.ui_state.settings_draft,
                        self.ui_state.settings_feedback.as_ref(),
                    )
                })
                .inner;
            match action {
                SettingsAction::ApplyClicked => self.apply_settings(),
                SettingsAction::ResetClicked => {
                    self.ui_state.settings_draft = self.config.clone();
                    self.ui_state.settings_feedback = None;
                }
                SettingsAction::Changed => self.ui_state.settings_feedback = None,
                SettingsAction::None => {}
            }
        }

        // ── Conversation ─────────────────────────────────────
        let transcript = self.controller.borrow().display();
        let busy = self.controller.borrow().is_busy();
        if busy {
            ctx.request_repaint();
        }
        let submitted = CentralPanel::default()
            .show(ctx, |ui| chat::chat_panel(ui, &mut self.ui_state, &transcript, busy))
            .inner;
        if let Some(text) = submitted {
            self.dispatch_message(text, ctx);
        }
    }
}

/// Defaults plus `LANGFLOW_*` values baked in at build time; a browser
/// has no process environment to read at runtime.
fn load_config() -> ChatConfig {
    let config = ChatConfig::from_lookup(build_env);
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("Ignoring build-time configuration: {}", e);
            ChatConfig::default()
        }
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_API_URL => option_env!("LANGFLOW_API_URL"),
        ENV_COMPONENT_KEY => option_env!("LANGFLOW_COMPONENT_KEY"),
        ENV_SENDER_NAME => option_env!("LANGFLOW_SENDER_NAME"),
        ENV_DEFAULT_SESSION => option_env!("LANGFLOW_DEFAULT_SESSION"),
        ENV_MAX_HISTORY => option_env!("LANGFLOW_MAX_HISTORY"),
        ENV_TIMEOUT_MS => option_env!("LANGFLOW_TIMEOUT_MS"),
        _ => None,
    };
    value.map(str::to_string)
}
