// src/ui/widgets.rs
use std::time::{Duration, Instant};

use eframe::egui;

use crate::report::DisplayResult;
use crate::state::{Toast, ToastKind};

const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Dismissible status row. Returns true when the dismiss button was clicked.
pub fn toast(ui: &mut egui::Ui, toast: &Toast) -> bool {
    let mut dismissed = false;
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let (icon, color) = match toast.kind {
                ToastKind::Success => ("✔", egui::Color32::from_rgb(45, 212, 191)),
                ToastKind::Error => ("✖", egui::Color32::from_rgb(248, 113, 113)),
            };
            ui.label(egui::RichText::new(icon).color(color));
            ui.label(&toast.message);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        });
    });
    dismissed
}

pub fn loader(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(message);
    });
}

/// Summary + insight bullets for the current result, with a copy button whose
/// "Copied" label reverts after a short delay.
pub fn result_card(ui: &mut egui::Ui, result: &DisplayResult, copied_at: &mut Option<Instant>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.heading("Analysis result");
            if !result.video_name.is_empty() {
                ui.label(egui::RichText::new(format!("· {}", result.video_name)).weak());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let recently_copied = copied_at
                    .as_ref()
                    .map_or(false, |at| at.elapsed() < COPY_FEEDBACK);
                let label = if recently_copied { "✔ Copied" } else { "📋 Copy" };
                if ui.small_button(label).clicked() {
                    let full_text = std::iter::once(result.summary.as_str())
                        .chain(result.insights.iter().map(String::as_str))
                        .collect::<Vec<_>>()
                        .join("\n\n");
                    ui.output_mut(|o| o.copied_text = full_text);
                    *copied_at = Some(Instant::now());
                }
                if recently_copied {
                    // Repaint once the label is due to revert.
                    ui.ctx().request_repaint_after(COPY_FEEDBACK);
                }
            });
        });

        ui.separator();

        ui.label(egui::RichText::new("SUMMARY").small().weak());
        ui.label(&result.summary);
        ui.add_space(8.0);

        ui.label(egui::RichText::new("KEY INSIGHTS").small().weak());
        for insight in &result.insights {
            ui.horizontal_wrapped(|ui| {
                ui.label("•");
                ui.label(insight);
            });
        }
    });
}
