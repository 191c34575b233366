// src/ui/analytics.rs
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use crate::data::{ALERTS_TODAY, EVENT_DISTRIBUTION, TOTAL_INCIDENTS};

pub fn show_analytics_view(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        stat_card(ui, "Total incidents", &TOTAL_INCIDENTS.to_string());
        stat_card(ui, "Alerts today", &ALERTS_TODAY.to_string());
        stat_card(ui, "Window", "Last 24h");
    });

    ui.add_space(12.0);
    ui.heading("Event distribution");
    ui.add_space(4.0);

    let bars: Vec<Bar> = EVENT_DISTRIBUTION
        .iter()
        .enumerate()
        .map(|(index, bucket)| {
            Bar::new(index as f64, bucket.count as f64)
                .name(bucket.label)
                .fill(bucket.color)
        })
        .collect();

    Plot::new("event_distribution")
        .height(220.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });

    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for bucket in &EVENT_DISTRIBUTION {
            let pct = bucket.count as f64 / TOTAL_INCIDENTS as f64 * 100.0;
            ui.label(egui::RichText::new("●").color(bucket.color));
            ui.label(format!("{} {:.0}%", bucket.label, pct));
            ui.add_space(8.0);
        }
    });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: &str) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title.to_uppercase()).small().weak());
            ui.label(egui::RichText::new(value).strong().size(22.0));
        });
    });
}
