// src/ui/upload.rs
use eframe::egui;
use rfd::FileDialog;

use crate::state::upload::SelectedFile;
use crate::state::AppState;
use crate::ui::widgets;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

pub fn show_upload_view(ui: &mut egui::Ui, state: &mut AppState) {
    let available_size = ui.available_size();

    egui::Grid::new("upload_grid")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            // Left column - upload flow and current result
            ui.vertical(|ui| {
                ui.set_min_width(available_size.x * 0.66);

                show_hero(ui);
                ui.add_space(12.0);
                show_input_box(ui, state);
                ui.add_space(8.0);

                if let Some(toast) = state.upload.toast.clone() {
                    if widgets::toast(ui, &toast) {
                        state.upload.dismiss_toast();
                    }
                    ui.add_space(8.0);
                }

                if state.upload.processing {
                    widgets::loader(ui, "Generating response...");
                } else if let Some(result) = state.upload.current_result.clone() {
                    widgets::result_card(ui, &result, &mut state.upload.copied_at);
                }
            });

            // Right column - history sidebar
            ui.vertical(|ui| {
                ui.set_min_width(available_size.x * 0.28);
                show_history_sidebar(ui, state);
            });
        });
}

fn show_hero(ui: &mut egui::Ui) {
    ui.heading("Understand your videos in seconds");
    ui.label(
        "Upload a clip and InstaMIND returns a summary, key insights, and any \
         detected incidents. Everything is analyzed on your own backend.",
    );
}

fn show_input_box(ui: &mut egui::Ui, state: &mut AppState) {
    let stroke = if state.upload.drag_active {
        egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    egui::Frame::group(ui.style())
        .stroke(stroke)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                match &state.upload.selected {
                    Some(file) => {
                        ui.label(egui::RichText::new(&file.name).strong());
                    }
                    None => {
                        ui.label("Drag & drop a video here, or browse for one");
                    }
                }
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("📂 Browse...").clicked() {
                        let picked = FileDialog::new()
                            .add_filter("Video files", VIDEO_EXTENSIONS)
                            .set_title("Select a video")
                            .pick_file();
                        if let Some(path) = picked {
                            state.upload.select_file(Some(SelectedFile::from_path(path)));
                        }
                    }

                    if state.upload.selected.is_some() && ui.button("✖ Clear").clicked() {
                        state.upload.select_file(None);
                    }

                    let analyze = ui.add_enabled(
                        !state.upload.processing,
                        egui::Button::new("▶ Analyze video"),
                    );
                    if analyze.clicked() {
                        state.submit();
                    }
                });
            });
        });
}

fn show_history_sidebar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Previous results");
    ui.add_space(4.0);

    if state.upload.loading_history {
        widgets::loader(ui, "Loading past reports...");
        return;
    }
    if state.upload.history.is_empty() {
        ui.label("No analyses yet");
        return;
    }

    egui::ScrollArea::vertical()
        .id_source("history_scroll")
        .max_height(360.0)
        .show(ui, |ui| {
            let mut clicked = None;
            for (index, entry) in state.upload.history.iter().enumerate() {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    let label = format!("{}\n{}", entry.video_name, entry.created_at_label());
                    if ui.selectable_label(false, label).clicked() {
                        clicked = Some(index);
                    }
                });
                ui.add_space(4.0);
            }
            if let Some(index) = clicked {
                state.upload.select_history_entry(index);
            }
        });
}
