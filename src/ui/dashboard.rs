// src/ui/dashboard.rs
use eframe::egui;

use crate::data::{SAMPLE_INCIDENTS, SAMPLE_REASONING};
use crate::state::AppState;

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    let available_size = ui.available_size();

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label("System status:");
            ui.label(
                egui::RichText::new("ALERT")
                    .strong()
                    .color(egui::Color32::from_rgb(248, 113, 113)),
            );
            ui.label(egui::RichText::new("(sample feed, not live)").weak());
        });
    });
    ui.add_space(8.0);

    egui::Grid::new("dashboard_grid")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            // Left panel - incident timeline
            ui.vertical(|ui| {
                ui.set_min_width(available_size.x * 0.55);
                ui.heading("Timeline");
                ui.add_space(4.0);

                egui::ScrollArea::vertical()
                    .id_source("incident_timeline_scroll")
                    .show(ui, |ui| {
                        for (index, incident) in SAMPLE_INCIDENTS.iter().enumerate() {
                            let is_selected = state.selected_incident == index;
                            let label = format!(
                                "{}  {}  [{}]",
                                incident.timestamp, incident.event_label, incident.status
                            );
                            if ui.selectable_label(is_selected, label).clicked() {
                                state.selected_incident = index;
                            }
                            ui.add_space(2.0);
                        }
                    });
            });

            // Right panel - reasoning for the selected incident
            ui.vertical(|ui| {
                ui.set_min_width(available_size.x * 0.4);
                ui.heading("Why this decision");
                ui.add_space(4.0);

                if let Some(reasoning) = SAMPLE_REASONING.get(state.selected_incident) {
                    ui.group(|ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(reasoning.event_name).strong());
                        ui.label(format!(
                            "{} · confidence {:.0}%",
                            reasoning.event_type,
                            reasoning.confidence * 100.0
                        ));
                        ui.add_space(6.0);
                        for reason in &reasoning.reasons {
                            ui.horizontal_wrapped(|ui| {
                                ui.label("•");
                                ui.label(*reason);
                            });
                        }
                        ui.add_space(6.0);
                        ui.label(format!("Decision: {}", reasoning.decision));
                    });
                } else {
                    ui.label("Select an incident to see its reasoning");
                }
            });
        });
}
