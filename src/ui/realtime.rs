// src/ui/realtime.rs
use eframe::egui;

pub fn show_realtime_view(ui: &mut egui::Ui) {
    ui.add_space(ui.available_height() * 0.25);
    ui.vertical_centered(|ui| {
        ui.heading("Real time");
        ui.add_space(4.0);
        ui.label(
            "Live streaming and real-time features will appear here. \
             Connect feeds and see updates as they happen.",
        );
    });
}
