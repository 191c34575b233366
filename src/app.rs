// src/app.rs
use eframe::egui;

use crate::settings::AppConfig;
use crate::state::{AppState, Screen, Theme};

pub struct InstaMindApp {
    state: AppState,
}

impl InstaMindApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            state: AppState::new(config),
        }
    }

    fn show_nav(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.label(egui::RichText::new("InstaMIND").strong().size(18.0));

            ui.separator();

            // Tab selection using buttons
            let tabs = [
                (Screen::Upload, "Upload"),
                (Screen::Dashboard, "Dashboard"),
                (Screen::Analytics, "Analytics"),
                (Screen::Realtime, "Realtime"),
            ];

            for (screen, label) in tabs {
                if ui
                    .selectable_label(self.state.current_screen == screen, label)
                    .clicked()
                {
                    self.state.current_screen = screen;
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match self.state.theme {
                    Theme::Dark => "☀ Light",
                    Theme::Light => "🌙 Dark",
                };
                if ui.button(label).clicked() {
                    self.toggle_theme(ui.ctx());
                }
            });
        });
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.state.theme = match self.state.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        ctx.set_visuals(match self.state.theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        });
    }

    /// Wire native drag&drop into the upload flow: the hover flag drives the
    /// drop-zone highlight, and the first dropped file is offered to it.
    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        if self.state.current_screen != Screen::Upload {
            return;
        }
        self.state.upload.drag_active = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().next().and_then(|f| f.path) {
            self.state.upload.accept_drop(path);
        }
    }
}

impl eframe::App for InstaMindApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.pump_events();
        self.handle_file_drops(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_nav(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.current_screen {
            Screen::Upload => crate::ui::upload::show_upload_view(ui, &mut self.state),
            Screen::Dashboard => crate::ui::dashboard::show_dashboard_view(ui, &mut self.state),
            Screen::Analytics => crate::ui::analytics::show_analytics_view(ui),
            Screen::Realtime => crate::ui::realtime::show_realtime_view(ui),
        });

        // Workers settle while the UI is idle; keep polling until their
        // events have been drained.
        if self.state.busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        }
    }
}
